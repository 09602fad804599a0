//! Deck Messages
//!
//! Messages sent from the deck to UI surfaces. Surfaces are pure
//! renderers that display what the deck tells them to; they hold no
//! business logic of their own. This separation keeps the state machine
//! headless-testable and lets any surface (TUI, desktop, test harness)
//! implement the notification port however fits its modality.

use serde::{Deserialize, Serialize};

use crate::tasks::{Task, TaskId};
use crate::timer::TimerMode;

/// Messages from the deck to a UI surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckMessage {
    /// The countdown display changed.
    ClockChanged {
        /// Minutes digits, zero-padded to two characters.
        minutes: String,
        /// Seconds digits, zero-padded to two characters.
        seconds: String,
    },

    /// The selected mode changed; highlight exactly this mode control.
    ModeChanged {
        /// The newly selected mode.
        mode: TimerMode,
    },

    /// The running flag changed; swap the start/pause control label.
    RunningChanged {
        /// Whether the countdown is now running.
        running: bool,
    },

    /// A task was appended to the end of the list.
    TaskAdded {
        /// The stored task.
        task: Task,
    },

    /// A task row was removed.
    TaskRemoved {
        /// Id of the removed task.
        id: TaskId,
    },

    /// The task entry character counter changed.
    CharCount {
        /// Number of characters in the entry field.
        count: usize,
    },

    /// Empty-state visibility changed.
    EmptyState {
        /// Whether to show the "no tasks" placeholder.
        empty: bool,
    },

    /// Show a notification to the user (the alert port).
    Notify {
        /// Severity of the notification.
        level: NotifyLevel,
        /// Message content.
        message: String,
    },

    /// The session is over; the surface should shut down.
    Quit,
}

/// Severity of a [`DeckMessage::Notify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyLevel {
    /// Informational (a countdown period ended).
    Info,
    /// Warning (rejected input).
    Warning,
}
