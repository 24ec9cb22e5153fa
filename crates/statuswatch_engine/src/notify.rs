use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use watch_logging::{poll_cycle, watch_error, watch_info};

/// Production Telegram Bot API host.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub api_base: String,
    pub token: String,
    pub chat_id: String,
    pub request_timeout: Duration,
}

impl TelegramSettings {
    /// Production Bot API settings for the given bot token and chat.
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// Transport-level failure, including timeouts.
    #[error("telegram unreachable: {message}")]
    Transport { message: String },
    /// The Bot API answered, but not with a success status.
    #[error("telegram returned http {status}")]
    HttpStatus { status: u16 },
    /// The Bot API answered `ok: false`.
    #[error("telegram rejected the message: {description}")]
    Rejected { description: String },
}

/// Chat delivery for rendered messages.
///
/// Implementations must not let a delivery failure reach the poll loop;
/// a failed send is logged and dropped, never retried.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}

/// The subset of a Bot API answer the notifier inspects.
#[derive(Debug, Deserialize)]
struct SendMessageAnswer {
    ok: bool,
    description: Option<String>,
}

/// Telegram Bot API `sendMessage` delivery.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    settings: TelegramSettings,
}

impl TelegramNotifier {
    pub fn new(settings: TelegramSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, NotifyError> {
        reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| NotifyError::Transport {
                message: err.to_string(),
            })
    }

    /// One delivery attempt with the failure surfaced.
    ///
    /// The poll loop goes through [`Notifier::notify`]; this is public so
    /// tests can assert on the exact failure.
    pub async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let client = self.build_client()?;
        let url = format!(
            "{}/bot{}/sendMessage",
            self.settings.api_base, self.settings.token
        );
        let payload = json!({
            "chat_id": self.settings.chat_id,
            "text": text,
        });

        let response = client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| NotifyError::Transport {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let answer: SendMessageAnswer =
            response.json().await.map_err(|err| NotifyError::Transport {
                message: err.to_string(),
            })?;
        if !answer.ok {
            return Err(NotifyError::Rejected {
                description: answer
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) {
        match self.send(text).await {
            Ok(()) => {
                watch_info!("cycle {}: message delivered to telegram", poll_cycle());
            }
            Err(err) => {
                watch_error!("cycle {}: telegram delivery failed: {err}", poll_cycle());
            }
        }
    }
}
