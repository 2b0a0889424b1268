//! App-open advertising
//!
//! The ad SDK is injected as an [`AdPresenter`]; nothing here reaches for a
//! process-wide instance. [`AdPresentationTrigger`] starts the SDK once at
//! launch and asks for an app-open ad whenever the app becomes active.
//!
//! Requests are fire-and-forget. The trigger does not wait for the ad, and
//! navigation may change underneath it at any time.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ad SDK operations the app relies on
pub trait AdPresenter: Send + Sync {
    /// Initialize the SDK
    fn start(&self);

    /// Present an app-open ad if one is loaded
    fn show_app_open_ad(&self);
}

/// Lifecycle phase of the app's scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenePhase {
    /// In the foreground and receiving events
    Active,
    /// In the foreground but not receiving events
    Inactive,
    /// Not visible
    Background,
}

/// Requests app-open ads on lifecycle transitions
pub struct AdPresentationTrigger {
    presenter: Arc<dyn AdPresenter>,
    started: bool,
    phase: Option<ScenePhase>,
    requests: u64,
}

impl AdPresentationTrigger {
    /// Create a trigger around a presenter
    pub fn new(presenter: Arc<dyn AdPresenter>) -> Self {
        Self {
            presenter,
            started: false,
            phase: None,
            requests: 0,
        }
    }

    /// Start the SDK; later calls do nothing
    pub fn launch(&mut self) {
        if self.started {
            return;
        }
        self.presenter.start();
        self.started = true;
        tracing::info!("ad SDK started");
    }

    /// Handle a scene phase change
    ///
    /// Entering [`ScenePhase::Active`] from any other phase (or from no
    /// phase at all) requests an app-open ad. Returns whether a request
    /// was made.
    pub fn on_scene_phase(&mut self, phase: ScenePhase) -> bool {
        let previous = self.phase.replace(phase);
        if previous == Some(phase) || phase != ScenePhase::Active {
            return false;
        }

        self.requests += 1;
        tracing::debug!(?previous, requests = self.requests, "requesting app-open ad");
        self.presenter.show_app_open_ad();
        true
    }

    /// Whether [`launch`](Self::launch) has run
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Last phase seen
    pub fn phase(&self) -> Option<ScenePhase> {
        self.phase
    }

    /// Number of app-open ads requested so far
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl std::fmt::Debug for AdPresentationTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdPresentationTrigger")
            .field("started", &self.started)
            .field("phase", &self.phase)
            .field("requests", &self.requests)
            .finish_non_exhaustive()
    }
}

/// Presenter for builds without an ad SDK
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAdPresenter;

impl AdPresenter for NoopAdPresenter {
    fn start(&self) {}

    fn show_app_open_ad(&self) {}
}

/// Calls received by a [`RecordingAdPresenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdEvent {
    /// `start` was called
    Started,
    /// `show_app_open_ad` was called
    AppOpenRequested,
}

/// Presenter that records every call, for tests and diagnostics
#[derive(Debug, Default)]
pub struct RecordingAdPresenter {
    events: Mutex<Vec<AdEvent>>,
}

impl RecordingAdPresenter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order
    pub fn events(&self) -> Vec<AdEvent> {
        self.events.lock().clone()
    }

    /// Number of app-open requests received
    pub fn app_open_requests(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| **e == AdEvent::AppOpenRequested)
            .count()
    }
}

impl AdPresenter for RecordingAdPresenter {
    fn start(&self) {
        self.events.lock().push(AdEvent::Started);
    }

    fn show_app_open_ad(&self) {
        self.events.lock().push(AdEvent::AppOpenRequested);
    }
}
