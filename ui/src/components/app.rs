pub mod modals;
pub mod toasts;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use document::Stylesheet;
use modals::ModalOverlay;
use toasts::ToastList;

#[component]
pub fn App() -> Element {
    info!("App component loaded");

    rsx! {
        Stylesheet { href: asset!("/assets/main.css") }

        div { class: "wallet-shell",
            header { class: "wallet-header",
                h1 { class: "title is-4", "Ambire Wallet" }
            }
            main { class: "wallet-body",
                p { class: "wallet-placeholder", "This version of the wallet is being retired." }
            }
        }
        ModalOverlay {}
        ToastList {}
    }
}
