//! WebAssembly bindings
//!
//! Exposes the rendering core to a browser page, which shows the returned
//! text inside a `<pre>` element.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(message: &str);
}

/// Initialize WASM module
///
/// Sets up panic hooks and console logging. Calling it again keeps the
/// existing subscriber and reports the failed setup on the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    if let Err(e) = crate::core::logging::init_logging(Some("info"), None) {
        console_warn(&format!("cowpoke: failed to initialize logging: {}", e));
    }
}

/// Render `message` as a speech bubble wrapped at `width` columns
#[wasm_bindgen(js_name = renderBubble)]
pub fn render_bubble(message: &str, width: i32) -> String {
    crate::render_bubble(message, i64::from(width))
}

/// Render `message` at the default width with `art` underneath
#[wasm_bindgen]
pub fn compose(message: &str, art: &str) -> String {
    crate::core::compose(message, art)
}

/// Compose entry `index` of the built-in jokes and art.
///
/// Returns `undefined` when the index is out of range.
#[wasm_bindgen(js_name = showcaseEntry)]
pub fn showcase_entry(index: usize) -> Option<String> {
    crate::gallery::Showcase::with_jokes(crate::gallery::builtin_catalog()).render(index)
}

/// Index shown after `current` in a catalog of `modulo` entries, or
/// `undefined` for an empty catalog
#[wasm_bindgen(js_name = nextIndex)]
pub fn next_index(current: i32, modulo: usize) -> Option<usize> {
    crate::gallery::next_index(i64::from(current), modulo)
}
