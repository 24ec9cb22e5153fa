/// One poll iteration's outcome, fed to [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The cycle produced a user-facing message (possibly
    /// [`crate::NO_UPDATES`]) plus the server cursor when one was supplied.
    Polled {
        message: String,
        next_cursor: Option<i64>,
        /// Wall-clock time (unix seconds) the response was observed;
        /// the cursor fallback when the server omits `current_date`.
        polled_at: i64,
    },
    /// The cycle failed somewhere between the request and interpretation.
    PollFailed { error: String },
}
