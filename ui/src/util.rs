pub mod clipboard;

use crate::constants::{INVITE_CODE_PARAM, WAIT_FOR_CLOSE_PARAM};
use dioxus::logger::tracing::debug;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function get_current_time() {
    return Date.now();
}
")]
extern "C" {
    fn get_current_time() -> f64;
}

/// Milliseconds since the Unix epoch, from the browser clock.
pub fn now_ms() -> f64 {
    get_current_time()
}

/// How the migration notice was asked for in the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationParams {
    pub invite_code: Option<String>,
    pub wait_for_close: bool,
}

impl Default for MigrationParams {
    fn default() -> Self {
        Self {
            invite_code: None,
            wait_for_close: true,
        }
    }
}

impl MigrationParams {
    /// Read the parameters from `window.location.search`, falling back to
    /// defaults when there is no window or the query string is malformed.
    pub fn from_location() -> Self {
        let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
            return Self::default();
        };
        let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
            return Self::default();
        };

        let parsed = Self::from_values(
            params.get(INVITE_CODE_PARAM),
            params.get(WAIT_FOR_CLOSE_PARAM).as_deref(),
        );
        debug!("Migration params from URL: {:?}", parsed);
        parsed
    }

    pub fn from_values(invite_code: Option<String>, wait_for_close: Option<&str>) -> Self {
        Self {
            invite_code: invite_code.filter(|code| !code.is_empty()),
            wait_for_close: wait_for_close_from_param(wait_for_close),
        }
    }
}

/// Only an explicit `false` (or `0`) turns the wait off.
pub fn wait_for_close_from_param(value: Option<&str>) -> bool {
    !matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("false") | Some("0")
    )
}
