//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Keeping the fetched CSV in a signal (instead of page-global mutable state)
//! makes the render effect a plain function of its reactive inputs.

use dioxus::prelude::*;

/// Shared application state for the sea-ice chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the initial data fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Raw CSV text of the thickness time series, set once after the fetch
    pub csv_data: Signal<Option<String>>,
    /// Bumped on every window resize to re-trigger the render effect
    pub resize_epoch: Signal<u64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            csv_data: Signal::new(None),
            resize_epoch: Signal::new(0),
        }
    }
}
