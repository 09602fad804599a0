//! Display State
//!
//! Render state for the TUI, derived entirely from `DeckMessage`s. The
//! surface never computes timer or task logic itself - it applies what
//! the deck tells it and renders the result. Keeping this bridge pure
//! (no terminal types) makes the whole surface state testable headless.

use pomodeck_core::{DeckMessage, NotifyLevel, Task, TimerMode};

/// A pending modal alert.
///
/// The deck's notification port maps to a modal overlay here: the alert
/// stays up until the next key press dismisses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Severity, used for border color.
    pub level: NotifyLevel,
    /// Message text.
    pub message: String,
}

/// Everything the renderer needs to draw a frame.
#[derive(Clone, Debug)]
pub struct DisplayState {
    /// Clock minutes digits ("25").
    pub minutes: String,
    /// Clock seconds digits ("00").
    pub seconds: String,
    /// Highlighted mode control.
    pub mode: TimerMode,
    /// Whether the countdown runs (START vs PAUSE label).
    pub running: bool,
    /// Task rows in display order.
    pub tasks: Vec<Task>,
    /// Index of the selected task row.
    pub selected: usize,
    /// Character counter under the entry field.
    pub char_count: usize,
    /// Whether to show the "no tasks" placeholder.
    pub empty: bool,
    /// Pending modal alert, if any.
    pub alert: Option<Alert>,
    /// Set once the deck says the session is over.
    pub quitting: bool,
}

impl DisplayState {
    /// Fresh state matching a deck before its start snapshot arrives.
    #[must_use]
    pub fn new() -> Self {
        Self {
            minutes: "25".to_string(),
            seconds: "00".to_string(),
            mode: TimerMode::Pomodoro,
            running: false,
            tasks: Vec::new(),
            selected: 0,
            char_count: 0,
            empty: true,
            alert: None,
            quitting: false,
        }
    }

    /// Apply one deck message.
    pub fn apply_message(&mut self, msg: DeckMessage) {
        match msg {
            DeckMessage::ClockChanged { minutes, seconds } => {
                self.minutes = minutes;
                self.seconds = seconds;
            }
            DeckMessage::ModeChanged { mode } => {
                self.mode = mode;
            }
            DeckMessage::RunningChanged { running } => {
                self.running = running;
            }
            DeckMessage::TaskAdded { task } => {
                self.tasks.push(task);
            }
            DeckMessage::TaskRemoved { id } => {
                self.tasks.retain(|t| t.id != id);
                self.clamp_selection();
            }
            DeckMessage::CharCount { count } => {
                self.char_count = count;
            }
            DeckMessage::EmptyState { empty } => {
                self.empty = empty;
            }
            DeckMessage::Notify { level, message } => {
                self.alert = Some(Alert { level, message });
            }
            DeckMessage::Quit => {
                self.quitting = true;
            }
        }
    }

    /// The task under the selection cursor, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    /// Move the selection cursor up one row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection cursor down one row.
    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() {
            self.selected = (self.selected + 1).min(self.tasks.len() - 1);
        }
    }

    /// Drop the pending alert; returns whether one was up.
    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
