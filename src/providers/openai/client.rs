use super::types::{ChatCompletionRequest, ChatCompletionResponse, OpenAIError};
use crate::config::{Config, DEFAULT_BASE_URL};
use crate::provider::ChatProvider;
use crate::response::decode_response;
use crate::{Error, Prompt};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::debug;

const USE_CASE_HEADER: &str = "X-OpenAI-Use-Case";
const DATA_USAGE_OPT_OUT_HEADER: &str = "X-OpenAI-Data-Usage-Opt-Out";

/// OpenAI provider implementation.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    ///
    /// No timeout is set: a server that never answers blocks the caller.
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().build().map_err(Error::Request)?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Create a provider from resolved process configuration.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new_with_base_url(config.api_key.clone(), config.base_url.clone())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// POST an encoded payload and return the status and the fully read body.
    async fn send(&self, payload: Vec<u8>) -> Result<(StatusCode, Vec<u8>), Error> {
        let request = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(USE_CASE_HEADER, "government")
            .header(DATA_USAGE_OPT_OUT_HEADER, "true")
            .body(payload)
            .build()
            .map_err(Error::Request)?;

        debug!(url = %request.url(), "sending chat completion request");

        let response = self.client.execute(request).await.map_err(Error::Http)?;
        let status = response.status();
        let body = response.bytes().await.map_err(Error::Body)?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok((status, body.to_vec()))
    }

    /// Turn a non-2xx body into an API error, preferring the provider's own message.
    fn api_error(status: StatusCode, body: &[u8]) -> Error {
        let message = match serde_json::from_slice::<OpenAIError>(body) {
            Ok(error) => error.error.message,
            Err(_) => String::from_utf8_lossy(body).trim().to_string(),
        };
        Error::api(status.as_u16(), message)
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAIProvider {
    async fn generate(
        &self,
        model: &str,
        prompt: &Prompt,
    ) -> Result<ChatCompletionResponse, Error> {
        let payload = ChatCompletionRequest::new(model, prompt).to_bytes()?;
        let (status, body) = self.send(payload).await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        decode_response(&body)
    }
}
