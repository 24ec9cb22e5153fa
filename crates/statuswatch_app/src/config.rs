//! Environment-driven configuration.
//!
//! Three credentials are required and checked up front; everything else has
//! a production default. A `.env` file is honored when present (loaded by
//! the composition root before this module reads the environment).

use std::time::Duration;

use statuswatch_engine::DEFAULT_ENDPOINT;
use thiserror::Error;
use url::Url;

/// Delay between poll cycles when `POLL_INTERVAL_SECS` is not set.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Everything the poll loop needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more required variables are unset or empty. All of them are
    /// reported at once so a bare environment needs only one round trip.
    #[error("missing required environment variables: {}", .names.join(", "))]
    MissingVars { names: Vec<String> },
    #[error("PRACTICUM_ENDPOINT is not a valid http(s) url: {value:?}")]
    BadEndpoint { value: String },
    #[error("POLL_INTERVAL_SECS is not a positive integer: {value:?}")]
    BadInterval { value: String },
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads from an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut required = |name: &str| match lookup(name) {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                missing.push(name.to_string());
                None
            }
        };

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        let (practicum_token, telegram_token, telegram_chat_id) =
            match (practicum_token, telegram_token, telegram_chat_id) {
                (Some(practicum), Some(telegram), Some(chat)) => (practicum, telegram, chat),
                _ => return Err(ConfigError::MissingVars { names: missing }),
            };

        let optional = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let endpoint = match optional("PRACTICUM_ENDPOINT") {
            None => DEFAULT_ENDPOINT.to_string(),
            Some(raw) => match Url::parse(&raw) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => raw,
                _ => return Err(ConfigError::BadEndpoint { value: raw }),
            },
        };
        let poll_interval = match optional("POLL_INTERVAL_SECS") {
            None => DEFAULT_POLL_INTERVAL,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::BadInterval { value: raw }),
            },
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }
}
