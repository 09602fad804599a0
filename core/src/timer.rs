//! Countdown Timer State Machine
//!
//! The timer owns the current mode, the remaining seconds, and the running
//! flag. It is driven entirely by its host: surfaces call [`Timer::tick`]
//! once per second while the timer is running, and the timer reports what
//! happened through [`TickOutcome`]. The timer never schedules anything
//! itself, which keeps the "at most one ticker" invariant structural - the
//! host owns the single recurring schedule.

use serde::{Deserialize, Serialize};

/// Pomodoro work period length in seconds (25 minutes).
pub const POMODORO_SECS: u32 = 25 * 60;

/// Short break length in seconds (5 minutes).
pub const SHORT_BREAK_SECS: u32 = 5 * 60;

/// Long break length in seconds (15 minutes).
pub const LONG_BREAK_SECS: u32 = 15 * 60;

/// Countdown profile selected by the user.
///
/// Each mode carries a fixed duration; there are no custom durations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMode {
    /// Focused work period (25 minutes).
    #[default]
    Pomodoro,
    /// Short recovery break (5 minutes).
    ShortBreak,
    /// Long recovery break (15 minutes).
    LongBreak,
}

impl TimerMode {
    /// Fixed duration of this mode in seconds.
    #[must_use]
    pub fn duration_secs(self) -> u32 {
        match self {
            Self::Pomodoro => POMODORO_SECS,
            Self::ShortBreak => SHORT_BREAK_SECS,
            Self::LongBreak => LONG_BREAK_SECS,
        }
    }

    /// Human-readable label for mode controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Mode to auto-advance to when this mode's countdown completes.
    ///
    /// A pomodoro flows into a short break; both breaks flow back to a
    /// pomodoro. There is no long-break-after-N-pomodoros cycle policy.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Pomodoro => Self::ShortBreak,
            Self::ShortBreak | Self::LongBreak => Self::Pomodoro,
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Two-digit clock rendering of a second count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Minutes digits, zero-padded to two characters.
    pub minutes: String,
    /// Seconds digits, zero-padded to two characters.
    pub seconds: String,
}

/// Format a second count as zero-padded MM / SS digit pairs.
#[must_use]
pub fn format_clock(secs: u32) -> Clock {
    Clock {
        minutes: format!("{:02}", secs / 60),
        seconds: format!("{:02}", secs % 60),
    }
}

/// Result of advancing the countdown by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused; nothing changed.
    Idle,
    /// One second elapsed.
    Counted {
        /// Seconds still remaining after the decrement.
        remaining: u32,
    },
    /// The countdown reached zero: the period ended, the timer stopped,
    /// and the mode auto-advanced with its duration reloaded.
    Completed {
        /// Mode whose countdown just finished.
        finished: TimerMode,
        /// Mode the timer advanced to.
        next: TimerMode,
    },
}

/// The countdown timer.
///
/// Invariant: `remaining_secs` is reloaded to the mode's fixed duration on
/// every mode change and every reset, and a mode change always stops the
/// countdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
}

impl Timer {
    /// Create a stopped timer in pomodoro mode with a full countdown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TimerMode::Pomodoro,
            remaining_secs: TimerMode::Pomodoro.duration_secs(),
            running: false,
        }
    }

    /// Currently selected mode.
    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether the countdown is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current countdown rendered as clock digits.
    #[must_use]
    pub fn clock(&self) -> Clock {
        format_clock(self.remaining_secs)
    }

    /// Select a mode: stop the countdown and reload the mode's duration.
    ///
    /// Every mode value is valid, including re-selecting the current mode.
    pub fn set_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.running = false;
        self.remaining_secs = mode.duration_secs();
    }

    /// Reset the countdown by re-loading the current mode.
    pub fn reset(&mut self) {
        self.set_mode(self.mode);
    }

    /// Flip between running and paused; returns the new running flag.
    ///
    /// Pausing keeps the remaining seconds untouched, so toggling twice
    /// with no tick in between is a no-op.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Advance the countdown by one second of host time.
    ///
    /// Ticks while paused are ignored. A tick that arrives with zero
    /// seconds remaining completes the period: the timer stops and
    /// auto-advances to [`TimerMode::next`]. The zero check happens before
    /// the decrement, so a period displays 00:00 for one full tick before
    /// completing, matching a countdown that includes second zero.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        if self.remaining_secs == 0 {
            let finished = self.mode;
            let next = finished.next();
            self.set_mode(next);
            return TickOutcome::Completed { finished, next };
        }

        self.remaining_secs -= 1;
        TickOutcome::Counted {
            remaining: self.remaining_secs,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_mode_loads_fixed_duration() {
        let mut timer = Timer::new();

        for (mode, secs) in [
            (TimerMode::Pomodoro, 1500),
            (TimerMode::ShortBreak, 300),
            (TimerMode::LongBreak, 900),
        ] {
            timer.toggle();
            timer.set_mode(mode);
            assert_eq!(timer.mode(), mode);
            assert_eq!(timer.remaining_secs(), secs);
            assert!(!timer.is_running(), "set_mode must stop the countdown");
        }
    }

    #[test]
    fn test_clock_formatting() {
        assert_eq!(
            format_clock(125),
            Clock {
                minutes: "02".to_string(),
                seconds: "05".to_string()
            }
        );
        assert_eq!(
            format_clock(0),
            Clock {
                minutes: "00".to_string(),
                seconds: "00".to_string()
            }
        );
        assert_eq!(
            format_clock(3599),
            Clock {
                minutes: "59".to_string(),
                seconds: "59".to_string()
            }
        );
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut timer = Timer::new();
        assert!(timer.toggle());

        let outcome = timer.tick();
        assert_eq!(outcome, TickOutcome::Counted { remaining: 1499 });
        assert_eq!(timer.remaining_secs(), 1499);
        assert!(timer.is_running());
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut timer = Timer::new();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_secs(), 1500);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut timer = Timer::new();
        let before = timer.clone();

        assert!(timer.toggle());
        assert!(!timer.toggle());

        assert_eq!(timer, before);
    }

    #[test]
    fn test_pomodoro_completes_into_short_break() {
        let mut timer = Timer::new();
        timer.toggle();
        timer.remaining_secs = 0;

        let outcome = timer.tick();
        assert_eq!(
            outcome,
            TickOutcome::Completed {
                finished: TimerMode::Pomodoro,
                next: TimerMode::ShortBreak
            }
        );
        assert_eq!(timer.mode(), TimerMode::ShortBreak);
        assert_eq!(timer.remaining_secs(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_breaks_complete_into_pomodoro() {
        for break_mode in [TimerMode::ShortBreak, TimerMode::LongBreak] {
            let mut timer = Timer::new();
            timer.set_mode(break_mode);
            timer.toggle();
            timer.remaining_secs = 0;

            let outcome = timer.tick();
            assert_eq!(
                outcome,
                TickOutcome::Completed {
                    finished: break_mode,
                    next: TimerMode::Pomodoro
                }
            );
            assert_eq!(timer.remaining_secs(), 1500);
        }
    }

    #[test]
    fn test_reset_reloads_current_mode() {
        let mut timer = Timer::new();
        timer.set_mode(TimerMode::LongBreak);
        timer.toggle();
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 898);

        timer.reset();
        assert_eq!(timer.mode(), TimerMode::LongBreak);
        assert_eq!(timer.remaining_secs(), 900);
        assert!(!timer.is_running());
    }
}
