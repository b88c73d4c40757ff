//! Short-lived notifications shown in the corner of the page.

use crate::constants::TOAST_DURATION_MS;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;
use legends_migration_core::host::{ToastOptions, Toasts};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

pub static TOASTS: GlobalSignal<Vec<Toast>> = Global::new(Vec::new);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub error: bool,
}

/// Show a toast and schedule its removal. Returns the toast id.
pub fn push_toast(message: &str, options: ToastOptions) -> u64 {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    debug!("Toast {} (error: {}): {}", id, options.error, message);

    TOASTS.write().push(Toast {
        id,
        message: message.to_string(),
        error: options.error,
    });

    // Outlives whichever component raised the toast
    spawn_forever(async move {
        futures_timer::Delay::new(Duration::from_millis(TOAST_DURATION_MS)).await;
        dismiss_toast(id);
    });

    id
}

pub fn dismiss_toast(id: u64) {
    TOASTS.write().retain(|toast| toast.id != id);
}

/// [`Toasts`] backed by [`TOASTS`].
pub struct AppToasts;

impl Toasts for AppToasts {
    fn add_toast(&mut self, message: &str, options: ToastOptions) {
        push_toast(message, options);
    }
}

#[component]
pub fn ToastList() -> Element {
    let toasts = TOASTS.read().clone();

    rsx! {
        div { class: "toast-list",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: if toast.error { "notification toast is-danger" } else { "notification toast is-success" },
                    span { "{toast.message}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        onclick: move |_| dismiss_toast(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
