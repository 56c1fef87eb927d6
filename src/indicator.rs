//! Success feedback on the copy button.
//!
//! The button carries an `<img>` icon; on a successful copy its `src` is
//! swapped to a checkmark asset and restored after a short delay. The
//! pending revert is tracked per icon through DOM data attributes, so a
//! second click during the success window supersedes the earlier revert
//! instead of racing it.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

/// Icon shown while the "copied" indication is active.
pub const SUCCESS_ICON: &str = "/static/resources/copy-success.svg";

/// How long the success icon stays up before reverting.
pub const REVERT_DELAY_MS: u32 = 1_200;

/// Pre-success `src`, stashed so overlapping clicks restore the real icon.
const ORIGINAL_SRC_ATTR: &str = "data-copy-original-src";

/// Monotonic counter; a revert only fires if it is still the latest one.
const GENERATION_ATTR: &str = "data-copy-generation";

/// The button's icon image, if the markup has one.
pub fn find_icon(button: &HtmlElement) -> Option<Element> {
    button.query_selector("img").ok().flatten()
}

/// Swap the icon to the success asset and schedule the revert.
///
/// Fire-and-forget: callers do not await the revert. Each call bumps the
/// icon's generation and the scheduled revert is a no-op once a newer call
/// has taken over, so the latest indication always gets the full delay.
pub fn show_copied(icon: &Element) {
    let original = match icon.get_attribute(ORIGINAL_SRC_ATTR) {
        Some(src) => src,
        None => {
            let src = icon.get_attribute("src").unwrap_or_default();
            let _ = icon.set_attribute(ORIGINAL_SRC_ATTR, &src);
            src
        }
    };

    let generation = bump_generation(icon);
    let _ = icon.set_attribute("src", SUCCESS_ICON);

    let icon = icon.clone();
    spawn_local(async move {
        TimeoutFuture::new(REVERT_DELAY_MS).await;
        if current_generation(&icon) == generation {
            let _ = icon.set_attribute("src", &original);
            let _ = icon.remove_attribute(ORIGINAL_SRC_ATTR);
            let _ = icon.remove_attribute(GENERATION_ATTR);
        }
    });
}

fn current_generation(icon: &Element) -> u64 {
    parse_generation(icon.get_attribute(GENERATION_ATTR).as_deref())
}

fn bump_generation(icon: &Element) -> u64 {
    let next = current_generation(icon).wrapping_add(1);
    let _ = icon.set_attribute(GENERATION_ATTR, &next.to_string());
    next
}

fn parse_generation(attr: Option<&str>) -> u64 {
    attr.and_then(|v| v.parse().ok()).unwrap_or(0)
}
