//! Browser-side behavior tests, run with `wasm-pack test --headless`.
//!
//! The full copy path is not driven against a real clipboard here (headless
//! permission prompts make that nondeterministic); instead these tests pin
//! down the payload the copy would carry, the no-op guards, the icon
//! feedback timing, and the fallback surface cleanup.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use paste_clipboard::indicator::{show_copied, REVERT_DELAY_MS, SUCCESS_ICON};
use paste_clipboard::{copy_paste, copy_to_clipboard, extract, fallback};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Append a `<div>` with the given id and inner HTML to the body.
fn mount_div(id: &str, inner_html: &str) -> Element {
    let div = document().create_element("div").unwrap();
    div.set_id(id);
    div.set_inner_html(inner_html);
    document().body().unwrap().append_child(&div).unwrap();
    div
}

/// A copy button whose icon starts at `/static/resources/copy.svg`.
fn mount_copy_button() -> HtmlElement {
    let button: HtmlElement = document()
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    button.set_inner_html("<img src=\"/static/resources/copy.svg\" alt=\"copy\">");
    document().body().unwrap().append_child(&button).unwrap();
    button
}

fn icon_src(button: &HtmlElement) -> Option<String> {
    button
        .query_selector("img")
        .unwrap()
        .and_then(|img| img.get_attribute("src"))
}

#[wasm_bindgen_test]
fn strips_nested_buttons_and_trims() {
    let div = mount_div(
        "content-strip",
        "  Hello World\n  <button>\u{1f4cb} Copy</button>",
    );
    assert_eq!(extract::copyable_text(&div), Some("Hello World".to_string()));
    div.remove();
}

#[wasm_bindgen_test]
fn button_only_content_yields_nothing() {
    let div = mount_div("content-buttons", "<button>Copy</button><button>Delete</button>");
    assert_eq!(extract::copyable_text(&div), None);
    div.remove();
}

#[wasm_bindgen_test]
fn whitespace_only_content_yields_nothing() {
    let div = mount_div("content-blank", "   \n\t <button>Copy</button> ");
    assert_eq!(extract::copyable_text(&div), None);
    div.remove();
}

#[wasm_bindgen_test]
fn extraction_does_not_mutate_the_live_element() {
    let div = mount_div("content-live", "keep me<button>Copy</button>");
    let _ = extract::copyable_text(&div);
    assert!(div.query_selector("button").unwrap().is_some());
    div.remove();
}

#[wasm_bindgen_test]
async fn copy_paste_with_whitespace_content_is_a_noop() {
    let div = mount_div("paste-content", "   \n  <button>Copy</button>");
    let button = mount_copy_button();

    copy_paste(button.clone());
    TimeoutFuture::new(50).await;

    assert_eq!(icon_src(&button).as_deref(), Some("/static/resources/copy.svg"));
    div.remove();
    button.remove();
}

#[wasm_bindgen_test]
async fn missing_preview_element_is_a_noop() {
    let button = mount_copy_button();

    // No element with id content-99 exists anywhere on the page
    copy_to_clipboard("99", button.clone());
    TimeoutFuture::new(50).await;

    assert_eq!(icon_src(&button).as_deref(), Some("/static/resources/copy.svg"));
    button.remove();
}

#[wasm_bindgen_test]
fn button_without_icon_aborts_before_copying() {
    let div = mount_div("content-noicon", "Hello World");
    let button: HtmlElement = document()
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    document().body().unwrap().append_child(&button).unwrap();

    // Must not panic and must not touch the button's contents
    copy_to_clipboard("noicon", button.clone());
    assert_eq!(button.inner_html(), "");
    div.remove();
    button.remove();
}

#[wasm_bindgen_test]
async fn success_icon_swaps_then_reverts() {
    let button = mount_copy_button();
    let icon = button.query_selector("img").unwrap().unwrap();

    show_copied(&icon);
    assert_eq!(icon.get_attribute("src").as_deref(), Some(SUCCESS_ICON));

    TimeoutFuture::new(REVERT_DELAY_MS + 100).await;
    assert_eq!(
        icon.get_attribute("src").as_deref(),
        Some("/static/resources/copy.svg")
    );
    assert_eq!(icon.get_attribute("data-copy-original-src"), None);
    button.remove();
}

#[wasm_bindgen_test]
async fn overlapping_copies_keep_the_success_icon_up() {
    let button = mount_copy_button();
    let icon = button.query_selector("img").unwrap().unwrap();

    show_copied(&icon);
    TimeoutFuture::new(800).await;
    show_copied(&icon);

    // The first revert (t=1200) must have been superseded by the second click
    TimeoutFuture::new(600).await;
    assert_eq!(icon.get_attribute("src").as_deref(), Some(SUCCESS_ICON));

    // The second revert (t=2000) restores the real icon, not the checkmark
    TimeoutFuture::new(700).await;
    assert_eq!(
        icon.get_attribute("src").as_deref(),
        Some("/static/resources/copy.svg")
    );
    button.remove();
}

#[wasm_bindgen_test]
fn fallback_surface_is_removed_on_every_path() {
    assert!(document().query_selector("textarea").unwrap().is_none());

    // Headless runs may refuse the copy command; cleanup must hold either way
    let _ = fallback::copy("Hello World");

    assert!(document().query_selector("textarea").unwrap().is_none());
}
