use crate::{Effect, Msg, PollState};

fn failure_text(error: &str) -> String {
    format!("Сбой в работе программы: \"{error}\"")
}

/// Pure update function: applies one iteration outcome to the poll state and
/// returns the deliveries the loop must perform.
///
/// At most one effect is produced per call: a repeated message or a repeated
/// failure produces none.
pub fn update(mut state: PollState, msg: Msg) -> (PollState, Vec<Effect>) {
    let effects = match msg {
        Msg::Polled {
            message,
            next_cursor,
            polled_at,
        } => {
            let effects = if state.last_message() == Some(message.as_str()) {
                Vec::new()
            } else {
                let text = message.clone();
                state.note_message(message);
                vec![Effect::Notify { text }]
            };
            // A successful cycle resolves any previously reported failure.
            state.clear_error();
            state.advance_cursor(next_cursor.unwrap_or(polled_at));
            effects
        }
        Msg::PollFailed { error } => {
            let text = failure_text(&error);
            if state.last_error() == Some(text.as_str()) {
                Vec::new()
            } else {
                state.note_error(text.clone());
                vec![Effect::Alert { text }]
            }
        }
    };

    (state, effects)
}
