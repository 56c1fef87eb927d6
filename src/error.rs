//! Error taxonomy for the copy paths.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why a copy attempt could not be completed.
///
/// `ClipboardUnavailable` and `WriteRejected` are recoverable: the caller
/// falls back to the legacy copy command. `CommandRefused` and
/// `CommandFailed` are terminal for the operation.
#[derive(Debug, Error)]
pub enum CopyError {
    /// No window/document/body to operate on (headless or detached context).
    #[error("browser document is not available")]
    DocumentUnavailable,
    /// Clipboard API missing or the page is not a secure context.
    #[error("clipboard API is not available in this context")]
    ClipboardUnavailable,
    /// The Clipboard API promise rejected (e.g. permission denied).
    #[error("clipboard write was rejected: {0}")]
    WriteRejected(String),
    /// `document.execCommand("copy")` returned false.
    #[error("copy command was refused by the browser")]
    CommandRefused,
    /// `document.execCommand("copy")` threw.
    #[error("copy command failed: {0}")]
    CommandFailed(String),
}

/// Render a thrown JS value as a log-friendly string.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
