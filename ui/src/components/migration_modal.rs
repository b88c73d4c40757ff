use crate::components::app::modals::AppModals;
use crate::components::app::toasts::AppToasts;
use crate::util::clipboard::WebClipboard;
use crate::util::now_ms;
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCopy, FaXmark};
use dioxus_free_icons::Icon;
use legends_migration_core::content::{CODE_TITLE, COPY_LABEL, STORE_HINT, STORE_URL};
use legends_migration_core::countdown::{CloseControl, TickOutcome, TICK_INTERVAL_MS};
use legends_migration_core::MigrationNotice;
use std::time::Duration;

const LEGENDS_IMAGE: Asset = asset!("/assets/legends-image.svg");
const LEGENDS_IMAGE_2X: Asset = asset!("/assets/legends-image@2x.svg");
const CHROME_WEB_STORE_BADGE: Asset = asset!("/assets/chrome-web-store.svg");

/// Notice telling users this version is deprecated and pointing them to the
/// extension. Cannot be closed until the countdown ran out, unless
/// `wait_for_close` is false.
#[component]
pub fn MigrationModal(
    invite_code: Option<String>,
    #[props(default = true)] wait_for_close: bool,
) -> Element {
    let mut notice = use_signal(|| MigrationNotice::new(invite_code.clone(), wait_for_close));

    // Spawned once; the handle is cancelled when the modal unmounts
    let ticker = use_hook(move || {
        if !notice.peek().countdown().needs_ticking() {
            return None;
        }
        let started_at = now_ms();
        Some(spawn(async move {
            loop {
                futures_timer::Delay::new(Duration::from_millis(TICK_INTERVAL_MS)).await;
                let elapsed = (now_ms() - started_at).max(0.0) as u64;
                match notice.write().tick(elapsed) {
                    TickOutcome::Running => {}
                    TickOutcome::GateOpened => {
                        info!("Migration notice can now be closed");
                        break;
                    }
                    TickOutcome::Stopped => break,
                }
            }
        }))
    });

    use_drop(move || {
        if let Some(task) = ticker {
            task.cancel();
        }
        if let Ok(mut notice) = notice.try_write() {
            notice.deactivate();
        }
        debug!("Migration notice torn down");
    });

    let handle_close = move |_| {
        notice.read().request_dismiss(&mut AppModals);
    };

    // Not tied to this scope: closing the modal mid-copy must still toast
    let handle_copy = move |_| {
        let snapshot = notice.read().clone();
        spawn_forever(async move {
            snapshot
                .copy_invite_code(&WebClipboard, &mut AppToasts)
                .await;
        });
    };

    let (variant_class, title, text, close_control, code) = {
        let state = notice.read();
        let variant = state.variant();
        (
            variant.css_class(),
            variant.title(),
            variant.text(),
            state.close_control(),
            state.invite_code().map(str::to_string),
        )
    };
    let srcset = format!("{} 2x", LEGENDS_IMAGE_2X);

    rsx! {
        div { class: "migration-modal {variant_class}",
            div { class: "migration-header",
                img {
                    class: "header-image",
                    src: LEGENDS_IMAGE,
                    srcset: "{srcset}",
                    alt: "",
                }
                {
                    match close_control {
                        CloseControl::Countdown { seconds } => rsx! {
                            div { class: "close-wrapper",
                                span { class: "remaining-time", "{seconds}" }
                            }
                        },
                        CloseControl::Dismiss => rsx! {
                            div { class: "close-wrapper close-enabled",
                                button {
                                    class: "close-button",
                                    r#type: "button",
                                    onclick: handle_close,
                                    Icon { icon: FaXmark, width: 16, height: 16 }
                                }
                            }
                        },
                    }
                }
            }
            div { class: "migration-content",
                h2 { class: "migration-title", "{title}" }
                p { class: "migration-text", "{text}" }
                if let Some(code) = code {
                    div { class: "code-wrapper",
                        span { class: "code-title", "{CODE_TITLE}" }
                        span { class: "code", "{code}" }
                        button {
                            class: "copy-button",
                            r#type: "button",
                            onclick: handle_copy,
                            Icon { icon: FaCopy, width: 14, height: 14 }
                            span { "{COPY_LABEL}" }
                        }
                    }
                    div { class: "store-wrapper",
                        p { class: "store-text", "{STORE_HINT}" }
                        a {
                            class: "store-link",
                            href: STORE_URL,
                            target: "_blank",
                            rel: "noreferrer",
                            img { src: CHROME_WEB_STORE_BADGE, alt: "Chrome Web Store" }
                        }
                    }
                }
            }
        }
    }
}
