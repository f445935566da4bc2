use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

/// OpenAI-compatible endpoint of the Gemini API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// The generation model is fixed for every task.
pub const MODEL_NAME: &str = "gemini-1.5-flash-latest";

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_MAX_SESSIONS: usize = 64;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub api_base: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    pub max_sessions: usize,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Config with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_base: DEFAULT_API_BASE.to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
            cors_allowed_origin: None,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// `GOOGLE_API_KEY` is mandatory; the server refuses to start without it.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError(
                    "GOOGLE_API_KEY is not set. Add it to .env or the environment.".to_string(),
                )
            })?;

        let mut config = Self::new(api_key);
        if let Ok(api_base) = env::var("GENAI_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(host) = env::var("WEB_SERVER_HOST") {
            config.web_server_host = host;
        }
        config.web_server_port = parse_env("WEB_SERVER_PORT").unwrap_or(config.web_server_port);
        config.max_upload_bytes =
            parse_env("MAX_UPLOAD_BYTES").unwrap_or(config.max_upload_bytes);
        config.max_sessions = parse_env("MAX_SESSIONS")
            .filter(|max| *max > 0)
            .unwrap_or(config.max_sessions);
        config.cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.trim().is_empty());

        Ok(config)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            max_sessions: 4,
            ..Self::new("test-api-key")
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
