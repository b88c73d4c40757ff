use legends_migration_core::host::{Clipboard, ClipboardError};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// `navigator.clipboard` of the current window.
pub struct WebClipboard;

impl Clipboard for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let navigator = window.navigator();

        // Insecure contexts have no clipboard at all
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| ClipboardError::Unavailable)?;
        availability(!(clipboard.is_undefined() || clipboard.is_null()))?;

        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| {
                let message = js_sys::Reflect::get(&e, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string());
                rejected(message)
            })
    }
}

fn availability(present: bool) -> Result<(), ClipboardError> {
    if present {
        Ok(())
    } else {
        Err(ClipboardError::Unavailable)
    }
}

/// Rejections are usually a `DOMException`; keep its message when there is one.
fn rejected(message: Option<String>) -> ClipboardError {
    ClipboardError::Rejected(message.unwrap_or_else(|| "unknown reason".to_string()))
}
