//! Minimum display time before the notice may be dismissed.
//!
//! The countdown owns the dismissal gate. The gate starts closed (unless the
//! caller opted out of waiting) and opens exactly once, when the remaining
//! time reaches zero. After that, and after [`Countdown::stop`], ticks are
//! ignored.

use tracing::debug;

/// How long the notice stays up before it can be closed.
pub const CAN_CLOSE_AFTER_MS: u64 = 9400;

/// Period of the countdown tick.
pub const TICK_INTERVAL_MS: u64 = 500;

/// Below this many remaining milliseconds the display is pinned to 1.
pub const FINAL_SECOND_WINDOW_MS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Closed,
    Open,
}

/// Result of feeding one tick into the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; keep ticking.
    Running,
    /// This tick opened the gate; stop ticking.
    GateOpened,
    /// The tick was ignored because the gate is open or the countdown stopped.
    Stopped,
}

/// What sits in the close slot of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseControl {
    /// Seconds left, never 0.
    Countdown { seconds: u64 },
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining_ms: i64,
    gate: Gate,
    stopped: bool,
}

impl Countdown {
    pub fn new(wait_for_close: bool) -> Self {
        Self {
            remaining_ms: CAN_CLOSE_AFTER_MS as i64,
            gate: if wait_for_close { Gate::Closed } else { Gate::Open },
            stopped: false,
        }
    }

    /// Recompute the remaining time from the elapsed time since activation.
    ///
    /// Remaining time never goes up, so a clock stepping backwards cannot
    /// make the displayed value grow.
    pub fn tick(&mut self, elapsed_ms: u64) -> TickOutcome {
        if self.stopped || self.gate == Gate::Open {
            return TickOutcome::Stopped;
        }

        let elapsed = i64::try_from(elapsed_ms).unwrap_or(i64::MAX);
        let remaining = (CAN_CLOSE_AFTER_MS as i64).saturating_sub(elapsed);
        self.remaining_ms = self.remaining_ms.min(remaining);

        if self.remaining_ms <= 0 {
            debug!("Dismissal gate opened after {}ms", elapsed_ms);
            self.gate = Gate::Open;
            TickOutcome::GateOpened
        } else {
            TickOutcome::Running
        }
    }

    /// Stop reacting to ticks. Used on teardown; the gate stays as it is.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn can_close(&self) -> bool {
        self.gate == Gate::Open
    }

    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    /// Whether a tick task is needed at all.
    pub fn needs_ticking(&self) -> bool {
        !self.stopped && self.gate == Gate::Closed
    }

    pub fn close_control(&self) -> CloseControl {
        match self.gate {
            Gate::Open => CloseControl::Dismiss,
            Gate::Closed => CloseControl::Countdown {
                seconds: displayed_seconds(self.remaining_ms),
            },
        }
    }
}

/// Whole seconds shown for `remaining_ms`, rounded half up, floored at 1.
pub fn displayed_seconds(remaining_ms: i64) -> u64 {
    if remaining_ms > FINAL_SECOND_WINDOW_MS {
        ((remaining_ms + 500) / 1000) as u64
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_when_waiting() {
        let countdown = Countdown::new(true);
        assert!(!countdown.can_close());
        assert!(countdown.needs_ticking());
        assert_eq!(
            countdown.close_control(),
            CloseControl::Countdown { seconds: 9 }
        );
    }

    #[test]
    fn test_starts_open_without_waiting() {
        let mut countdown = Countdown::new(false);
        assert!(countdown.can_close());
        assert!(!countdown.needs_ticking());
        assert_eq!(countdown.close_control(), CloseControl::Dismiss);
        assert_eq!(countdown.tick(0), TickOutcome::Stopped);
    }

    #[test]
    fn test_gate_opens_at_threshold() {
        let mut countdown = Countdown::new(true);
        assert_eq!(countdown.tick(9399), TickOutcome::Running);
        assert!(!countdown.can_close());
        assert_eq!(countdown.tick(9400), TickOutcome::GateOpened);
        assert!(countdown.can_close());
        assert_eq!(countdown.tick(9900), TickOutcome::Stopped);
        assert_eq!(countdown.close_control(), CloseControl::Dismiss);
    }

    #[test]
    fn test_late_tick_opens_gate() {
        let mut countdown = Countdown::new(true);
        assert_eq!(countdown.tick(60_000), TickOutcome::GateOpened);
        assert!(countdown.remaining_ms() <= 0);
    }

    #[test]
    fn test_displayed_seconds_rounding() {
        assert_eq!(displayed_seconds(9400), 9);
        assert_eq!(displayed_seconds(8900), 9);
        assert_eq!(displayed_seconds(8499), 8);
        assert_eq!(displayed_seconds(1500), 2);
        assert_eq!(displayed_seconds(1499), 1);
        assert_eq!(displayed_seconds(501), 1);
        assert_eq!(displayed_seconds(500), 1);
        assert_eq!(displayed_seconds(1), 1);
        assert_eq!(displayed_seconds(0), 1);
        assert_eq!(displayed_seconds(-200), 1);
    }

    #[test]
    fn test_display_never_zero_and_non_increasing() {
        let mut countdown = Countdown::new(true);
        let mut last = u64::MAX;
        let mut elapsed = 0;
        while !countdown.can_close() {
            elapsed += TICK_INTERVAL_MS;
            countdown.tick(elapsed);
            if let CloseControl::Countdown { seconds } = countdown.close_control() {
                assert!(seconds >= 1);
                assert!(seconds <= last);
                last = seconds;
            }
        }
        assert_eq!(elapsed, 9500);
    }

    #[test]
    fn test_final_window_shows_one() {
        let mut countdown = Countdown::new(true);
        countdown.tick(8950);
        assert_eq!(
            countdown.close_control(),
            CloseControl::Countdown { seconds: 1 }
        );
        countdown.tick(9399);
        assert_eq!(
            countdown.close_control(),
            CloseControl::Countdown { seconds: 1 }
        );
    }

    #[test]
    fn test_clock_going_back_does_not_raise_remaining() {
        let mut countdown = Countdown::new(true);
        countdown.tick(5000);
        let remaining = countdown.remaining_ms();
        countdown.tick(1000);
        assert_eq!(countdown.remaining_ms(), remaining);
    }

    #[test]
    fn test_stop_freezes_countdown() {
        let mut countdown = Countdown::new(true);
        countdown.tick(2000);
        countdown.stop();
        let before = countdown.clone();
        assert_eq!(countdown.tick(9400), TickOutcome::Stopped);
        assert_eq!(countdown, before);
        assert!(!countdown.can_close());
        assert!(!countdown.needs_ticking());
    }
}
