//! Submission state, validation and notification types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::{AnalysisError, FailureKind};
use crate::model::ResultPayload;

/// Maximum input length, counted in chars after trimming.
pub const MAX_INPUT_CHARS: usize = 100;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Validating,
    InFlight,
    Completed,
    Failed,
}

impl SubmissionState {
    /// Whether a submit trigger is accepted in this state.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }
}

/// Input rejected before any request is made.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input is empty")]
    Empty,

    #[error("Input is {length} characters, limit is {max}")]
    TooLong { length: usize, max: usize },
}

/// Trim `raw` and check it against the input rules, first failure wins.
pub fn validate_input(raw: &str) -> Result<&str, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    let length = text.chars().count();
    if length > MAX_INPUT_CHARS {
        return Err(ValidationError::TooLong {
            length,
            max: MAX_INPUT_CHARS,
        });
    }

    Ok(text)
}

/// How long a notification stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyDuration {
    Short,
    Long,
}

/// User-facing failure notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: FailureKind,
    pub message: String,
    pub duration: NotifyDuration,
}

impl Notification {
    fn new(kind: FailureKind, message: impl Into<String>, duration: NotifyDuration) -> Self {
        Self {
            kind,
            message: message.into(),
            duration,
        }
    }
}

impl From<&ValidationError> for Notification {
    fn from(err: &ValidationError) -> Self {
        let message = match err {
            ValidationError::Empty => "Please enter text".to_string(),
            ValidationError::TooLong { max, .. } => {
                format!("Please enter {} characters or fewer", max)
            }
        };
        Notification::new(FailureKind::Validation, message, NotifyDuration::Short)
    }
}

impl From<&AnalysisError> for Notification {
    fn from(err: &AnalysisError) -> Self {
        match err {
            AnalysisError::Server { status, .. } => Notification::new(
                FailureKind::Server,
                format!("Analysis failed: {}", status),
                NotifyDuration::Short,
            ),
            AnalysisError::Timeout(message) | AnalysisError::Connection(message) => {
                Notification::new(
                    FailureKind::Network,
                    format!("Connection failed: {}", message),
                    NotifyDuration::Long,
                )
            }
            AnalysisError::Protocol(_) => Notification::new(
                FailureKind::Protocol,
                "Analysis failed: invalid response",
                NotifyDuration::Short,
            ),
        }
    }
}

/// Result of one submit trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another attempt was in flight; nothing happened.
    Ignored,
    /// Input failed validation; no request was made.
    Rejected(ValidationError),
    /// The result was handed to the display surface.
    Completed(ResultPayload),
    /// The request failed; the user was notified.
    Failed(AnalysisError),
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SubmitOutcome::Rejected(_) => Some(FailureKind::Validation),
            SubmitOutcome::Failed(err) => Some(err.kind()),
            SubmitOutcome::Ignored | SubmitOutcome::Completed(_) => None,
        }
    }
}
