//! Collaborators the notice talks to. The application provides the
//! implementations; tests use recording fakes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard API is not available")]
    Unavailable,

    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Options accepted alongside a toast message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub error: bool,
}

impl ToastOptions {
    pub fn error() -> Self {
        Self { error: true }
    }
}

/// Owner of the overlay stack the notice is mounted in.
pub trait ModalHost {
    fn hide_modal(&mut self);
}

/// Short-lived user-facing messages. Fire and forget.
pub trait Toasts {
    fn add_toast(&mut self, message: &str, options: ToastOptions);
}

/// System clipboard. Implementations run on a single-threaded event loop, so
/// the returned future is not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
