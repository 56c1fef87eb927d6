//! Legacy copy path for contexts without the Clipboard API.
//!
//! An off-screen readonly `<textarea>` is inserted, selected, and run
//! through `document.execCommand("copy")`. The textarea is removed on every
//! exit path, including when the command throws.

use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

use crate::error::{describe_js, CopyError};

/// Copy `text` via the legacy copy command.
pub fn copy(text: &str) -> Result<(), CopyError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CopyError::DocumentUnavailable)?;
    let body = document.body().ok_or(CopyError::DocumentUnavailable)?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|err| CopyError::CommandFailed(describe_js(&err)))?
        .dyn_into()
        .map_err(|_| CopyError::DocumentUnavailable)?;
    textarea.set_value(text);
    textarea.set_read_only(true);
    // Keep it out of view without scrolling the page
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");

    body.append_child(&textarea)
        .map_err(|err| CopyError::CommandFailed(describe_js(&err)))?;
    textarea.select();

    let html_document: &web_sys::HtmlDocument = document
        .dyn_ref()
        .ok_or(CopyError::DocumentUnavailable)?;
    let outcome = html_document.exec_command("copy");

    // Cleanup happens before the outcome is inspected so the surface is
    // gone on the success, refusal, and thrown-error paths alike
    textarea.remove();

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => Err(CopyError::CommandRefused),
        Err(err) => Err(CopyError::CommandFailed(describe_js(&err))),
    }
}
