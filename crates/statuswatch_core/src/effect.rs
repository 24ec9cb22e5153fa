/// Deliveries the poll loop must perform after an [`crate::update`] step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a status-change (or no-updates) message to the chat.
    Notify { text: String },
    /// Send an operational failure report to the chat.
    Alert { text: String },
}
