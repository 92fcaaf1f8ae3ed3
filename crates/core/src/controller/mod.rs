//! Submission orchestration.
//!
//! Drives one analysis attempt through the state machine:
//! Idle -> Validating -> InFlight -> Completed | Failed -> Idle
//!
//! Validation failures go straight from Validating back to Idle and never
//! reach the network.

mod runner;
mod surface;
mod types;

pub use runner::SubmissionController;
pub use surface::DisplaySurface;
pub use types::{
    validate_input, Notification, NotifyDuration, SubmissionState, SubmitOutcome,
    ValidationError, MAX_INPUT_CHARS,
};
