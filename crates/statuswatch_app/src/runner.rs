//! The poll loop: drives one HTTP cycle at a time through the pure update
//! step and performs whatever deliveries it asks for.

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use statuswatch_core::{check_response, parse_status, update, Effect, Msg, PollState, NO_UPDATES};
use statuswatch_engine::{Fetcher, Notifier};
use watch_logging::{
    poll_cycle, set_poll_cycle, watch_debug, watch_error, watch_info, watch_warn,
};

/// One complete cycle: fetch, interpret, dedup, deliver.
///
/// Never fails; every failure along the way becomes a [`Msg::PollFailed`]
/// and is handled by the same update step as a successful cycle.
pub async fn poll_once(
    fetcher: &dyn Fetcher,
    notifier: &dyn Notifier,
    state: PollState,
) -> PollState {
    let msg = match fetcher.fetch(state.cursor()).await {
        Ok(payload) => interpret(payload),
        Err(err) => {
            watch_error!("cycle {}: {err}", poll_cycle());
            Msg::PollFailed {
                error: err.to_string(),
            }
        }
    };

    let (state, effects) = update(state, msg);
    if effects.is_empty() {
        watch_debug!("cycle {}: nothing new to deliver", poll_cycle());
    }
    for effect in effects {
        match effect {
            Effect::Notify { text } => {
                watch_info!("cycle {}: delivering status update", poll_cycle());
                notifier.notify(&text).await;
            }
            Effect::Alert { text } => {
                watch_warn!("cycle {}: delivering failure report", poll_cycle());
                notifier.notify(&text).await;
            }
        }
    }
    state
}

/// Turns a decoded payload into the cycle outcome.
///
/// Failures are logged here, at the point of detection, so a failure shows
/// up in the log on every cycle it occurs even when dedup later suppresses
/// its chat delivery.
fn interpret(payload: Value) -> Msg {
    let polled_at = Utc::now().timestamp();

    let checked = match check_response(&payload) {
        Ok(checked) => checked,
        Err(err) => {
            watch_error!("cycle {}: {err}", poll_cycle());
            return Msg::PollFailed {
                error: err.to_string(),
            };
        }
    };
    watch_debug!(
        "cycle {}: {} record(s) in the window",
        poll_cycle(),
        checked.homeworks.len()
    );

    let message = match checked.homeworks.first() {
        None => {
            watch_debug!("cycle {}: no status changes in the window", poll_cycle());
            NO_UPDATES.to_string()
        }
        Some(entry) => match parse_status(entry) {
            Ok(message) => message,
            Err(err) => {
                watch_error!("cycle {}: {err}", poll_cycle());
                return Msg::PollFailed {
                    error: err.to_string(),
                };
            }
        },
    };

    Msg::Polled {
        message,
        next_cursor: checked.current_date,
        polled_at,
    }
}

/// Eternal loop: one cycle, a fixed sleep, forever.
pub async fn run(
    fetcher: &dyn Fetcher,
    notifier: &dyn Notifier,
    mut state: PollState,
    interval: Duration,
) {
    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        set_poll_cycle(cycle);
        watch_debug!("cycle {cycle}: polling with cursor {}", state.cursor());
        state = poll_once(fetcher, notifier, state).await;
        watch_debug!("cycle {cycle}: sleeping for {}s", interval.as_secs());
        tokio::time::sleep(interval).await;
    }
}
