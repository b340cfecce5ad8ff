//! Shared Dioxus components and vega-embed bridge for the sea-ice chart app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the vega-embed glue via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (container, header, error box)
//! - `fetch`: Runtime fetch of static text resources with typed errors
//! - `dom`: Container measurement and window resize subscription

pub mod components;
pub mod dom;
pub mod fetch;
pub mod js_bridge;
pub mod state;
