//! Response decoding and presentation.

use crate::providers::openai::ChatCompletionResponse;
use crate::{Error, Result};
use std::io::Write;
use tracing::debug;

/// Decode a raw chat-completion body.
pub fn decode_response(body: &[u8]) -> Result<ChatCompletionResponse> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

impl ChatCompletionResponse {
    /// Text of the first choice's message.
    pub fn first_content(&self) -> Result<&str> {
        let choice = self.choices.first().ok_or(Error::EmptyResponse)?;
        Ok(choice.message.text())
    }

    /// Log token accounting at debug level.
    pub fn log_usage(&self) {
        if let Some(usage) = &self.usage {
            debug!(
                model = %self.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }
    }
}

/// Write the reply framed by blank lines.
pub fn write_reply<W: Write>(out: &mut W, content: &str) -> Result<()> {
    write!(out, "\n{content}\n\n")?;
    out.flush()?;
    Ok(())
}
