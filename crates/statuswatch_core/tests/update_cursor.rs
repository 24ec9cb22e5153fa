use statuswatch_core::{update, Msg, PollState};

fn init_logging() {
    watch_logging::initialize_for_tests();
}

fn polled(next_cursor: Option<i64>, polled_at: i64) -> Msg {
    Msg::Polled {
        message: "status changed".to_string(),
        next_cursor,
        polled_at,
    }
}

#[test]
fn server_cursor_is_adopted_verbatim() {
    init_logging();
    let state = PollState::new(100);

    let (state, _effects) = update(state, polled(Some(1000), 999));

    assert_eq!(state.cursor(), 1000);
}

#[test]
fn absent_cursor_falls_back_to_observation_time() {
    init_logging();
    let state = PollState::new(100);

    let (state, _effects) = update(state, polled(None, 555));

    assert_eq!(state.cursor(), 555);
}

#[test]
fn failed_cycle_leaves_the_cursor_alone() {
    init_logging();
    let state = PollState::new(100);
    let (state, _effects) = update(state, polled(Some(1000), 999));

    let (state, _effects) = update(
        state,
        Msg::PollFailed {
            error: "status api returned http 500".to_string(),
        },
    );

    assert_eq!(state.cursor(), 1000);
}

#[test]
fn cursor_starts_at_the_given_time() {
    init_logging();
    let state = PollState::new(1_700_000_000);
    assert_eq!(state.cursor(), 1_700_000_000);
}
