//! Overlay slot the application mounts modals into.
//!
//! Only one modal is shown at a time. Clearing the slot unmounts the modal
//! component, which runs its teardown hooks.

use crate::components::migration_modal::MigrationModal;
use crate::util::MigrationParams;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use legends_migration_core::host::ModalHost;

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveModal {
    Migration {
        invite_code: Option<String>,
        wait_for_close: bool,
    },
}

pub static ACTIVE_MODAL: GlobalSignal<Option<ActiveModal>> = Global::new(initial_modal);

/// The migration notice is presented as soon as the app starts.
fn initial_modal() -> Option<ActiveModal> {
    let params = initial_params();
    info!("Presenting migration notice: {:?}", params);
    Some(ActiveModal::Migration {
        invite_code: params.invite_code,
        wait_for_close: params.wait_for_close,
    })
}

#[cfg(not(feature = "example-data"))]
fn initial_params() -> MigrationParams {
    MigrationParams::from_location()
}

#[cfg(feature = "example-data")]
fn initial_params() -> MigrationParams {
    let mut params = MigrationParams::from_location();
    if params.invite_code.is_none() {
        params.invite_code = Some(crate::constants::EXAMPLE_INVITE_CODE.to_string());
    }
    params
}

/// [`ModalHost`] backed by [`ACTIVE_MODAL`].
pub struct AppModals;

impl ModalHost for AppModals {
    fn hide_modal(&mut self) {
        info!("Hiding modal");
        *ACTIVE_MODAL.write() = None;
    }
}

#[component]
pub fn ModalOverlay() -> Element {
    let active = ACTIVE_MODAL.read().clone();

    match active {
        Some(ActiveModal::Migration {
            invite_code,
            wait_for_close,
        }) => rsx! {
            div { class: "modal is-active",
                div { class: "modal-background" }
                div { class: "modal-content",
                    MigrationModal { invite_code, wait_for_close }
                }
            }
        },
        None => rsx! {},
    }
}
