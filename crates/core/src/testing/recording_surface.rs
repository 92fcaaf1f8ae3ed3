//! Display surface that records every call.

use std::sync::Mutex;

use crate::controller::{DisplaySurface, Notification, SubmissionState};
use crate::model::ResultPayload;

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    StateChanged {
        from: SubmissionState,
        to: SubmissionState,
    },
    LoadingStarted,
    LoadingStopped,
    Notified(Notification),
    Navigated(ResultPayload),
}

/// [`DisplaySurface`] that keeps an ordered log of calls for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// State transitions in order.
    pub fn transitions(&self) -> Vec<(SubmissionState, SubmissionState)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::StateChanged { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    /// States entered, starting with the initial Idle.
    pub fn state_path(&self) -> Vec<SubmissionState> {
        let mut path = vec![SubmissionState::Idle];
        path.extend(self.transitions().into_iter().map(|(_, to)| to));
        path
    }

    /// Notification messages in order.
    pub fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Notified(n) => Some(n.message),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<ResultPayload> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Navigated(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: SurfaceEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

impl DisplaySurface for RecordingSurface {
    fn state_changed(&self, from: SubmissionState, to: SubmissionState) {
        self.record(SurfaceEvent::StateChanged { from, to });
    }

    fn loading_started(&self) {
        self.record(SurfaceEvent::LoadingStarted);
    }

    fn loading_stopped(&self) {
        self.record(SurfaceEvent::LoadingStopped);
    }

    fn notify(&self, notification: Notification) {
        self.record(SurfaceEvent::Notified(notification));
    }

    fn navigate(&self, payload: ResultPayload) {
        self.record(SurfaceEvent::Navigated(payload));
    }
}
