//! Ask an OpenAI chat model a single question from the command line.
//!
//! The library resolves configuration from the environment, sends one
//! chat-completion request and decodes the reply; the `jeeves` binary wires
//! these pieces to process arguments, stdout and exit codes.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod providers;
pub mod response;
pub mod types;

// Re-export core types for easy usage
pub use config::Config;
pub use error::{Error, Result};
pub use provider::ChatProvider;
pub use providers::*;
pub use response::*;
pub use types::*;
