//! Query session
//!
//! Request/response lifecycle for one question at a time, plus the answer
//! pane rendering.

mod answer;
pub mod session_render;
mod session_state;

pub use answer::{Answer, ConfidenceTier};
pub use session_state::{InFlight, QuerySession, SettleOutcome, SubmitOutcome};
