//! The exported copy operations shared by the paste index and detail pages.
//!
//! HTML usage:
//! index page: `onclick="copyToClipboard('{{ paste.id }}', this)"`
//! detail page: `onclick="copyPaste(this)"`

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::error::CopyError;
use crate::{clipboard, extract, fallback, indicator};

/// Element id of the full paste body on detail pages.
pub const PASTE_CONTENT_ID: &str = "paste-content";

/// Shown when both copy paths fail.
const COPY_BLOCKED_MESSAGE: &str = "Copy failed (browser blocked it).";

/// Index page: copy the preview snippet of the paste with `paste_id`.
///
/// Resolves the element with id `content-<paste_id>`; a missing element is
/// a no-op so a stale button cannot break the page.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(paste_id: &str, button: HtmlElement) {
    match element_by_id(&preview_content_id(paste_id)) {
        Some(content) => copy_from_element(&content, &button),
        None => log::warn!("no preview element for paste {}", paste_id),
    }
}

/// Detail page: copy the full paste body.
#[wasm_bindgen(js_name = copyPaste)]
pub fn copy_paste(button: HtmlElement) {
    match element_by_id(PASTE_CONTENT_ID) {
        Some(content) => copy_from_element(&content, &button),
        None => log::warn!("no {} element on this page", PASTE_CONTENT_ID),
    }
}

/// Core operation behind both page entry points, with the nullable element
/// of the JS boundary. A null element is a silent no-op.
#[wasm_bindgen(js_name = copyFromElementRemovingButtons)]
pub fn copy_from_element_removing_buttons(element: Option<Element>, button: HtmlElement) {
    if let Some(element) = element {
        copy_from_element(&element, &button);
    }
}

/// Copy `element`'s text (nested buttons stripped) and indicate success on
/// `button`'s icon.
///
/// The modern Clipboard API is tried first; if it is unavailable or rejects
/// the write, the legacy copy command takes over. Only a failure of both
/// paths is surfaced to the user.
pub fn copy_from_element(element: &Element, button: &HtmlElement) {
    let text = match extract::copyable_text(element) {
        Some(text) => text,
        None => {
            log::debug!("copy target has no text after stripping buttons");
            return;
        }
    };

    // Without an icon there is no way to signal success, so don't copy
    let icon = match indicator::find_icon(button) {
        Some(icon) => icon,
        None => {
            log::warn!("copy button has no <img> icon");
            return;
        }
    };

    spawn_local(async move {
        match clipboard::write_text(&text).await {
            Ok(_) => indicator::show_copied(&icon),
            Err(err) => {
                match &err {
                    CopyError::ClipboardUnavailable => {
                        log::debug!("{}, using legacy copy command", err)
                    }
                    _ => log::warn!("{}, using legacy copy command", err),
                }
                match fallback::copy(&text) {
                    Ok(_) => indicator::show_copied(&icon),
                    Err(err) => {
                        log::error!("Failed to copy to clipboard: {}", err);
                        alert_copy_blocked();
                    }
                }
            }
        }
    });
}

/// Element id of a paste preview on the index page.
fn preview_content_id(paste_id: &str) -> String {
    format!("content-{}", paste_id)
}

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn alert_copy_blocked() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(COPY_BLOCKED_MESSAGE);
    }
}
