//! Command-line surface: usage text and the request/print flow.

use crate::provider::ChatProvider;
use crate::response::write_reply;
use crate::{Config, Prompt, Result};
use std::io::Write;
use tracing::debug;

pub const USAGE: &str = r#"
Usage: jeeves <prompt>

Environment variables:
OPENAI_API_KEY			your OpenAI API key (mandatory)
JEEVES_OPENAI_MODEL		specify the model to use, default is "gpt-4o-mini" (optional)
JEEVES_LOG_LEVEL		sets log level, default is "info" (optional)
JEEVES_OPENAI_BASE_URL		API base URL, default is "https://api.openai.com/v1" (optional)
"#;

/// Ask `provider` the prompt and write the first choice to `out`.
pub async fn run<P, W>(provider: &P, config: &Config, prompt: &Prompt, out: &mut W) -> Result<()>
where
    P: ChatProvider + ?Sized,
    W: Write,
{
    debug!("Using model: {}", config.model);
    debug!("User prompt: {}", prompt);

    let response = provider.generate(&config.model, prompt).await?;
    response.log_usage();

    write_reply(out, response.first_content()?)
}
