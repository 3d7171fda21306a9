//! Configuration management for the contact book.
//!
//! Settings come from environment variables, with a `.env` file honored
//! when present. Every setting has a default, so a bare environment works.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level directive for stderr logging (default: "error")
    pub log_level: String,

    /// Prompt printed before each command is read (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level directive (default: "error")
    /// - `PROMPT`: REPL prompt text (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt = env::var("PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        if prompt.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level, prompt })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
