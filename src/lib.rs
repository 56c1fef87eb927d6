//! Shared clipboard logic for the paste index and detail pages.
//!
//! Copying works on HTTP (LAN) deployments too: the Clipboard API is used
//! when the browsing context is secure, with a fallback to the legacy copy
//! command when it is not. Success is indicated by temporarily swapping the
//! copy button's icon image.
//!
//! The host page wires the exported functions to its copy buttons:
//!
//! ```html
//! <button onclick="copyToClipboard('{{ paste.id }}', this)">
//!     <img src="/static/resources/copy.svg" alt="copy">
//! </button>
//! ```

use wasm_bindgen::prelude::wasm_bindgen;

pub mod clipboard;
mod copy;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod indicator;

pub use copy::{
    copy_from_element, copy_from_element_removing_buttons, copy_paste, copy_to_clipboard,
    PASTE_CONTENT_ID,
};
pub use error::CopyError;

/// Module initializer, run once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Panic hook and console logging for better error messages in the browser
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::debug!("clipboard helpers ready");
}
