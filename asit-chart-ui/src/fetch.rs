//! Runtime fetch of static text resources.
//!
//! Wraps the browser `fetch()` API via `web_sys` so a failed request ends in
//! a typed error the app can surface, rather than an unhandled rejection.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Errors that can occur when fetching a static text resource.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No `window` object; only happens outside a browser context.
    #[error("No window object available")]
    NoWindow,

    /// The request itself failed (network error, CORS, malformed URL).
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be read as text.
    #[error("Response body is not text: {0}")]
    Body(String),
}

/// Fetch `url` and resolve its body as text.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Request(format!("{e:?}")))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| FetchError::Request("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| FetchError::Body(format!("{e:?}")))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Body(format!("{e:?}")))?;

    text_value
        .as_string()
        .ok_or_else(|| FetchError::Body("body did not decode to a string".to_string()))
}
