use std::time::Duration;

use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use watch_logging::{poll_cycle, watch_debug, watch_info};

/// Production endpoint for homework review statuses.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub token: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl FetchSettings {
    /// Production endpoint settings for the given API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure, including timeouts.
    #[error("status api unreachable: {message}")]
    Connection { message: String },
    /// The endpoint answered, but not with a success status.
    #[error("status api returned http {status}")]
    HttpStatus { status: u16 },
    /// The body could not be parsed as JSON.
    #[error("status api response is not valid json: {message}")]
    Decode { message: String },
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Requests every status change at or after `from_date` (unix seconds).
    ///
    /// A zero cursor means "no watermark yet" and is replaced with the
    /// current wall-clock time.
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError>;
}

/// HTTP client for the homework status API.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Connection {
                message: err.to_string(),
            })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        let from_date = if from_date == 0 {
            Utc::now().timestamp()
        } else {
            from_date
        };

        let client = self.build_client()?;
        watch_debug!(
            "cycle {}: GET {} from_date={}",
            poll_cycle(),
            self.settings.endpoint,
            from_date
        );

        let response = client
            .get(&self.settings.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.settings.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            });
        }
        watch_info!("cycle {}: status api answered {}", poll_cycle(), status);

        let body = response.text().await.map_err(map_reqwest_error)?;
        let payload = serde_json::from_str(&body).map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })?;
        watch_debug!("cycle {}: response decoded as json", poll_cycle());

        Ok(payload)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Connection {
            message: "request timed out".to_string(),
        };
    }
    ApiError::Connection {
        message: err.to_string(),
    }
}
