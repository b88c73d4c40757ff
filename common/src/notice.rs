use crate::content::{DisplayVariant, VariantContent, COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};
use crate::countdown::{CloseControl, Countdown, TickOutcome};
use crate::host::{Clipboard, ModalHost, ToastOptions, Toasts};
use tracing::{debug, warn};

/// How a copy attempt ended. The matching toast has already been sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Headless model of the migration notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationNotice {
    invite_code: Option<String>,
    variant: DisplayVariant,
    countdown: Countdown,
}

impl MigrationNotice {
    pub fn new(invite_code: Option<String>, wait_for_close: bool) -> Self {
        let invite_code = invite_code.filter(|code| !code.is_empty());
        let variant = DisplayVariant::from_invite_code(invite_code.as_deref());
        Self {
            invite_code,
            variant,
            countdown: Countdown::new(wait_for_close),
        }
    }

    pub fn variant(&self) -> DisplayVariant {
        self.variant
    }

    pub fn content(&self) -> VariantContent {
        self.variant.content()
    }

    pub fn invite_code(&self) -> Option<&str> {
        self.invite_code.as_deref()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn can_close(&self) -> bool {
        self.countdown.can_close()
    }

    pub fn close_control(&self) -> CloseControl {
        self.countdown.close_control()
    }

    pub fn tick(&mut self, elapsed_ms: u64) -> TickOutcome {
        self.countdown.tick(elapsed_ms)
    }

    /// Teardown: no further tick changes anything.
    pub fn deactivate(&mut self) {
        self.countdown.stop();
    }

    /// Forward a close click to the host if the gate is open.
    /// Returns whether the host was asked to hide the modal.
    pub fn request_dismiss(&self, host: &mut impl ModalHost) -> bool {
        if !self.can_close() {
            debug!("Dismiss ignored, gate still closed");
            return false;
        }
        host.hide_modal();
        true
    }

    /// Copy the invite code and report the result through `toasts`.
    /// Does nothing and returns `None` when there is no code.
    pub async fn copy_invite_code(
        &self,
        clipboard: &impl Clipboard,
        toasts: &mut impl Toasts,
    ) -> Option<CopyOutcome> {
        let code = self.invite_code.as_deref()?;
        Some(copy_invite_code(code, clipboard, toasts).await)
    }
}

/// Write `code` to the clipboard, turning the result into a toast.
pub async fn copy_invite_code(
    code: &str,
    clipboard: &impl Clipboard,
    toasts: &mut impl Toasts,
) -> CopyOutcome {
    match clipboard.write_text(code).await {
        Ok(()) => {
            toasts.add_toast(COPY_SUCCESS_MESSAGE, ToastOptions::default());
            CopyOutcome::Copied
        }
        Err(e) => {
            warn!("Failed to copy invite code: {}", e);
            toasts.add_toast(COPY_FAILURE_MESSAGE, ToastOptions::error());
            CopyOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::CAN_CLOSE_AFTER_MS;

    #[derive(Default)]
    struct CountingHost {
        hidden: usize,
    }

    impl ModalHost for CountingHost {
        fn hide_modal(&mut self) {
            self.hidden += 1;
        }
    }

    #[test]
    fn test_empty_code_is_dropped() {
        let notice = MigrationNotice::new(Some(String::new()), true);
        assert_eq!(notice.variant(), DisplayVariant::WithoutCode);
        assert_eq!(notice.invite_code(), None);
    }

    #[test]
    fn test_code_is_kept_verbatim() {
        let notice = MigrationNotice::new(Some(" abc ".to_string()), true);
        assert_eq!(notice.variant(), DisplayVariant::WithCode);
        assert_eq!(notice.invite_code(), Some(" abc "));
    }

    #[test]
    fn test_dismiss_waits_for_gate() {
        let mut notice = MigrationNotice::new(None, true);
        let mut host = CountingHost::default();

        notice.tick(CAN_CLOSE_AFTER_MS - 1);
        assert!(!notice.request_dismiss(&mut host));
        assert_eq!(host.hidden, 0);

        notice.tick(CAN_CLOSE_AFTER_MS);
        assert!(notice.request_dismiss(&mut host));
        assert_eq!(host.hidden, 1);
    }

    #[test]
    fn test_dismiss_without_waiting() {
        let notice = MigrationNotice::new(None, false);
        let mut host = CountingHost::default();
        assert_eq!(notice.close_control(), CloseControl::Dismiss);
        assert!(notice.request_dismiss(&mut host));
        assert!(notice.request_dismiss(&mut host));
        assert_eq!(host.hidden, 2);
    }

    #[test]
    fn test_deactivate_before_gate_opens() {
        let mut notice = MigrationNotice::new(None, true);
        notice.tick(1000);
        notice.deactivate();
        assert_eq!(notice.tick(CAN_CLOSE_AFTER_MS), TickOutcome::Stopped);
        assert!(!notice.can_close());
    }
}
