//! Statuswatch engine: the poll loop's HTTP collaborators.
mod fetch;
mod notify;

pub use fetch::{ApiError, FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use notify::{Notifier, NotifyError, TelegramNotifier, TelegramSettings, DEFAULT_API_BASE};
