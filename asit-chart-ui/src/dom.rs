//! Direct DOM access: container measurement and resize subscription.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Measured pixel width of the chart container, if it exists and has layout.
pub fn container_width(container_id: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let width = element.get_bounding_client_rect().width();
    (width > 0.0).then_some(width)
}

/// Register `callback` on the window `resize` event.
///
/// The closure lives for the lifetime of the page (`forget()`); chart apps
/// subscribe exactly once at mount and never unsubscribe.
pub fn subscribe_resize(mut callback: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window object; resize will not re-render the chart");
        return;
    };

    let closure = Closure::<dyn FnMut()>::new(move || callback());
    if window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to register resize listener");
    }
    closure.forget();
}
