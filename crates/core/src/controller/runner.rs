//! Submission controller implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::surface::DisplaySurface;
use super::types::{validate_input, Notification, SubmissionState, SubmitOutcome};
use crate::client::AnalysisClient;
use crate::model::ResultPayload;

/// Orchestrates analysis attempts for one input screen.
///
/// At most one attempt is in flight per controller: a submit that arrives
/// while another attempt is running returns [`SubmitOutcome::Ignored`]
/// without touching the client or the surface.
pub struct SubmissionController {
    client: Arc<dyn AnalysisClient>,
    surface: Arc<dyn DisplaySurface>,
    state: Mutex<SubmissionState>,
}

impl SubmissionController {
    pub fn new(client: Arc<dyn AnalysisClient>, surface: Arc<dyn DisplaySurface>) -> Self {
        Self {
            client,
            surface,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        *lock(&self.state)
    }

    /// Handle one submit trigger carrying the raw input text.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        if !self.begin() {
            warn!("Submit ignored: an analysis is already in progress");
            return SubmitOutcome::Ignored;
        }
        let _reset = IdleOnDrop(&self.state);

        let attempt = Uuid::new_v4();

        let text = match validate_input(raw) {
            Ok(text) => text.to_string(),
            Err(err) => {
                debug!(%attempt, "Input rejected: {}", err);
                self.surface.notify(Notification::from(&err));
                self.transition(SubmissionState::Idle);
                return SubmitOutcome::Rejected(err);
            }
        };

        self.transition(SubmissionState::InFlight);
        self.surface.loading_started();
        debug!(%attempt, "Analysis request issued");

        match self.client.analyze(&text).await {
            Ok(model) => {
                self.transition(SubmissionState::Completed);
                self.surface.loading_stopped();

                info!(
                    %attempt,
                    sentiment = %model.sentiment,
                    agreement = %model.consistency_info.agreement,
                    "Analysis completed"
                );

                let payload = ResultPayload::new(text, model);
                self.surface.navigate(payload.clone());
                self.transition(SubmissionState::Idle);
                SubmitOutcome::Completed(payload)
            }
            Err(err) => {
                self.transition(SubmissionState::Failed);
                self.surface.loading_stopped();

                warn!(%attempt, kind = ?err.kind(), "Analysis failed: {}", err);

                self.surface.notify(Notification::from(&err));
                self.transition(SubmissionState::Idle);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Idle -> Validating, atomically. False if not idle.
    fn begin(&self) -> bool {
        {
            let mut state = lock(&self.state);
            if !state.accepts_submit() {
                return false;
            }
            *state = SubmissionState::Validating;
        }
        self.surface
            .state_changed(SubmissionState::Idle, SubmissionState::Validating);
        true
    }

    fn transition(&self, to: SubmissionState) {
        let from = std::mem::replace(&mut *lock(&self.state), to);
        debug!("Submission state {:?} -> {:?}", from, to);
        self.surface.state_changed(from, to);
    }
}

/// Returns the controller to Idle if a submission future is dropped mid-flight.
struct IdleOnDrop<'a>(&'a Mutex<SubmissionState>);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        *lock(self.0) = SubmissionState::Idle;
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    // The guarded value is a plain enum, so a poisoned lock is still usable.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
