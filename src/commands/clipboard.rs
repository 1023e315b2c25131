//! Clipboard Commands
//!
//! Frontend wrapper for the async clipboard API.

use wasm_bindgen_futures::JsFuture;

/// Write plain text to the system clipboard
pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}
