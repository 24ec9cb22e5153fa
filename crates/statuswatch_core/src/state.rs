/// Cross-iteration poll state: the query cursor plus the dedup memory.
///
/// Owned by the poll loop and mutated only through [`crate::update`].
/// Nothing here survives a process restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    cursor: i64,
    last_message: Option<String>,
    last_error: Option<String>,
}

impl PollState {
    /// Starts tracking from `now` (unix seconds) with empty dedup memory.
    pub fn new(now: i64) -> Self {
        Self {
            cursor: now,
            last_message: None,
            last_error: None,
        }
    }

    /// Lower bound for the next query window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// The last status message handed to the notifier, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// The last failure report handed to the notifier, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn note_message(&mut self, message: String) {
        self.last_message = Some(message);
    }

    pub(crate) fn note_error(&mut self, error: String) {
        self.last_error = Some(error);
    }

    pub(crate) fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub(crate) fn advance_cursor(&mut self, to: i64) {
        self.cursor = to;
    }
}
