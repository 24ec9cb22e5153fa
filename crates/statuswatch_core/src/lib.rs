//! Statuswatch core: pure poll-loop policy and payload interpretation.
mod effect;
mod msg;
mod response;
mod state;
mod status;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use response::{check_response, CheckedResponse, ContentError};
pub use state::PollState;
pub use status::{parse_status, Homework, ParseError, NO_UPDATES};
pub use update::update;
