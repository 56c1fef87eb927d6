//! Text extraction from copy targets.
//!
//! Copy targets on the paste pages embed their own action buttons, so the
//! element is deep-cloned, the clone is stripped of every `<button>`
//! descendant, and the text is read from the clone. The live element is
//! never mutated.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// The text a copy of `element` would carry, or `None` when there is
/// nothing worth copying (extraction failed or the trimmed text is empty).
pub fn copyable_text(element: &Element) -> Option<String> {
    let clone: Element = element
        .clone_node_with_deep(true)
        .ok()?
        .dyn_into()
        .ok()?;

    let buttons = clone.query_selector_all("button").ok()?;
    for i in 0..buttons.length() {
        if let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            button.remove();
        }
    }

    // innerText reflects rendering; fall back to textContent when it comes
    // back empty (detached clones render nothing in some engines).
    let mut raw = clone
        .dyn_ref::<HtmlElement>()
        .map(|el| el.inner_text())
        .unwrap_or_default();
    if raw.is_empty() {
        raw = clone.text_content().unwrap_or_default();
    }

    non_empty_trimmed(&raw).map(str::to_owned)
}

/// Trim the extracted text, treating whitespace-only content as absent.
fn non_empty_trimmed(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
