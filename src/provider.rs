use crate::providers::openai::ChatCompletionResponse;
use crate::{Error, Prompt};

/// A chat-completion backend that answers one prompt with one response.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync + 'static {
    /// Send a single-turn completion request and return the decoded response.
    async fn generate(&self, model: &str, prompt: &Prompt)
        -> Result<ChatCompletionResponse, Error>;
}
