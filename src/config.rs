//! Process configuration, resolved once from the environment.

use crate::{Error, Result};
use std::env;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "JEEVES_OPENAI_MODEL";
pub const LOG_LEVEL_VAR: &str = "JEEVES_LOG_LEVEL";
pub const BASE_URL_VAR: &str = "JEEVES_OPENAI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Immutable settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub log_level: String,
    pub base_url: String,
}

impl Config {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or_else(|| {
            Error::config(format!(
                "{API_KEY_VAR} environment variable not found, please export it via the shell and try again"
            ))
        })?;

        let model = lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            log_level,
            base_url,
        })
    }
}
