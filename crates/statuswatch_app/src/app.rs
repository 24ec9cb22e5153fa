//! Composition root: environment, logging, HTTP collaborators, the loop.

use chrono::Utc;
use statuswatch_core::PollState;
use statuswatch_engine::{FetchSettings, ReqwestFetcher, TelegramNotifier, TelegramSettings};
use watch_logging::{watch_debug, watch_error, watch_info};

use crate::config::Config;
use crate::logging::{self, LogDestination};
use crate::runner;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::initialize(LogDestination::Both);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            watch_error!("startup aborted: {err}");
            return Err(err.into());
        }
    };
    watch_debug!("status endpoint: {}", config.endpoint);

    let poll_interval = config.poll_interval;
    let fetcher = ReqwestFetcher::new(FetchSettings {
        endpoint: config.endpoint,
        ..FetchSettings::new(config.practicum_token)
    });
    let notifier = TelegramNotifier::new(TelegramSettings::new(
        config.telegram_token,
        config.telegram_chat_id,
    ));
    let state = PollState::new(Utc::now().timestamp());

    watch_info!(
        "statuswatch started, polling every {}s",
        poll_interval.as_secs()
    );
    runner::run(&fetcher, &notifier, state, poll_interval).await;
    Ok(())
}
