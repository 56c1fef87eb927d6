//! Async wrapper around the Web Clipboard API.
//!
//! The Clipboard API is only exposed to secure contexts (HTTPS or
//! localhost); LAN/HTTP deployments must detect its absence and degrade to
//! the legacy copy command instead.

use web_sys::Clipboard;

use crate::error::{describe_js, CopyError};

/// Copy text to the system clipboard via the Clipboard API.
///
/// # Returns
/// * `Ok(())` if the text was successfully copied
/// * `Err(CopyError::ClipboardUnavailable)` if the API is not exposed here
/// * `Err(CopyError::WriteRejected)` if the browser rejected the write
pub async fn write_text(text: &str) -> Result<(), CopyError> {
    let clipboard = clipboard_api().ok_or(CopyError::ClipboardUnavailable)?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| CopyError::WriteRejected(describe_js(&err)))
}

/// The Clipboard API handle, if this context actually has one.
///
/// Mirrors the classic `navigator.clipboard && window.isSecureContext`
/// feature test: some browsers leave `navigator.clipboard` undefined on
/// plain HTTP, others expose it but reject every call.
fn clipboard_api() -> Option<Clipboard> {
    let window = web_sys::window()?;
    if !window.is_secure_context() {
        return None;
    }
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        return None;
    }
    Some(clipboard)
}
