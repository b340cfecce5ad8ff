//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while the time series is fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading sea-ice data..."
        }
    }
}
