use thiserror::Error;

/// Errors that can occur while asking the chat-completion API a question.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no prompt given")]
    MissingPrompt,

    #[error("{0}")]
    Config(String),

    #[error("marshalling json request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("creating request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("sending request to OpenAI API: {0}")]
    Http(#[source] reqwest::Error),

    #[error("reading response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("unmarshalling response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("empty response: the API returned no choices")]
    EmptyResponse,

    #[error("writing output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
