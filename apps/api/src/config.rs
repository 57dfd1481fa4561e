use std::time::Duration;

use anyhow::{Context, Result};

use crate::chat::service::ChatConfig;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 25;

/// Application configuration loaded from environment variables.
/// Startup fails if `DATABASE_URL` is missing; the Gemini key is optional so
/// the rest of the API can run without it.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub chat_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            chat_timeout_secs: match optional_env("CHAT_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("CHAT_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_CHAT_TIMEOUT_SECS,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Settings handed to the chat component at construction.
    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            timeout: Duration::from_secs(self.chat_timeout_secs),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            database_url: "postgres://localhost/edvise".to_string(),
            gemini_api_key: Some("key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            chat_timeout_secs: 25,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_chat_config_carries_credential_and_timeout() {
        let chat = sample().chat_config();
        assert_eq!(chat.api_key.as_deref(), Some("key"));
        assert_eq!(chat.model, "gemini-1.5-flash");
        assert_eq!(chat.timeout, Duration::from_secs(25));
    }

    #[test]
    fn test_chat_config_without_key() {
        let mut config = sample();
        config.gemini_api_key = None;
        assert!(config.chat_config().api_key.is_none());
    }
}
