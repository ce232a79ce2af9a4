use crate::{Error, Result};
use std::fmt;

use super::message::Message;

/// The user's question, assembled from command-line words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    /// Join the arguments (program name already removed) with single spaces.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = args.into_iter().collect();
        if words.is_empty() {
            return Err(Error::MissingPrompt);
        }

        let text = words
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");

        Ok(Self { text })
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The single user message sent for this prompt.
    pub fn to_message(&self) -> Message {
        Message::user(self.text.clone())
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt { text: s.to_string() }
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Prompt { text }
    }
}
