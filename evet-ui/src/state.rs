//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use evet_store::DatasetStore;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient user-visible notification (auto-dismissed by the app).
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Monotonic id so a delayed dismiss only clears its own notice.
    pub id: u64,
}

/// Shared application state for the EVET dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The dataset store owning all monthly records and statistics
    pub store: Signal<DatasetStore>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Whether a simulated reprocessing run is in flight
    pub processing: Signal<bool>,
    /// Bumped after every series mutation; chart effects key off it
    pub data_version: Signal<u64>,
    /// Current transient notification, if any
    pub notification: Signal<Option<Notice>>,
    /// Raw latitude input field text
    pub lat_input: Signal<String>,
    /// Raw longitude input field text
    pub lng_input: Signal<String>,
    /// Current buffer radius selected on the slider (km)
    pub buffer_km: Signal<f64>,
}

impl AppState {
    /// Create a new AppState seeded from a fresh dataset store.
    pub fn new() -> Self {
        let store = DatasetStore::new();
        let area = store.study_area();
        Self {
            store: Signal::new(store),
            loading: Signal::new(true),
            processing: Signal::new(false),
            data_version: Signal::new(0),
            notification: Signal::new(None),
            lat_input: Signal::new(format!("{}", area.lat)),
            lng_input: Signal::new(format!("{}", area.lng)),
            buffer_km: Signal::new(area.buffer_km),
        }
    }

    /// Bump the data version to trigger chart re-render effects.
    pub fn mark_data_changed(&mut self) {
        let next = (self.data_version)() + 1;
        self.data_version.set(next);
    }

    /// Show a notification, replacing any current one. Returns the notice
    /// id so the caller can schedule a matching dismiss.
    pub fn notify(&mut self, text: &str, kind: NoticeKind) -> u64 {
        let id = self.notification.peek().as_ref().map(|n| n.id + 1).unwrap_or(1);
        self.notification.set(Some(Notice {
            text: text.to_string(),
            kind,
            id,
        }));
        id
    }

    /// Dismiss the notification only if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.notification.peek().as_ref().map(|n| n.id) == Some(id) {
            self.notification.set(None);
        }
    }
}
