use super::types::{Notification, SubmissionState};
use crate::model::ResultPayload;

/// The screen a [`SubmissionController`](super::SubmissionController) drives.
///
/// Calls arrive on the task running the submission, in this order for a
/// successful attempt: `loading_started`, `loading_stopped`, `navigate`.
/// Implementations must not call back into the controller.
pub trait DisplaySurface: Send + Sync {
    /// Observe a state transition.
    fn state_changed(&self, _from: SubmissionState, _to: SubmissionState) {}

    /// Show progress and disable the submit control.
    fn loading_started(&self);

    /// Hide progress and re-enable the submit control.
    fn loading_stopped(&self);

    /// Show a failure notice.
    fn notify(&self, notification: Notification);

    /// Move to the result screen carrying `payload`.
    fn navigate(&self, payload: ResultPayload);
}
