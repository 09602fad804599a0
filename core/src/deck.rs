//! Deck - The Orchestration Core
//!
//! The deck owns the timer and the task list and routes every mutation
//! through [`Deck::handle_event`]. It is surface-agnostic: it does not
//! know or care whether it is talking to a TUI, a desktop shell, or a
//! test harness. It communicates through:
//!
//! - [`DeckMessage`]: commands sent TO the UI surface
//! - [`SurfaceEvent`]: events received FROM the UI surface
//!
//! Single-writer semantics: the deck is the only mutator of timer and
//! task state, so no locking is needed around either.

use tokio::sync::mpsc;

use crate::events::SurfaceEvent;
use crate::messages::{DeckMessage, NotifyLevel};
use crate::tasks::{TaskError, TaskList};
use crate::timer::{TickOutcome, Timer};

/// Channel capacity for deck-to-surface messages.
const MESSAGE_BUFFER: usize = 64;

/// Error when the deck cannot reach its surface.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// The surface dropped its receiver.
    #[error("surface channel closed")]
    SurfaceClosed,
}

/// The orchestration core: one timer, one task list, one surface channel.
pub struct Deck {
    timer: Timer,
    tasks: TaskList,
    tx: mpsc::Sender<DeckMessage>,
}

impl Deck {
    /// Create a deck and the message receiver for its surface.
    #[must_use]
    pub fn new() -> (Self, mpsc::Receiver<DeckMessage>) {
        let (tx, rx) = mpsc::channel(MESSAGE_BUFFER);
        (
            Self {
                timer: Timer::new(),
                tasks: TaskList::new(),
                tx,
            },
            rx,
        )
    }

    /// Emit the initial display snapshot.
    ///
    /// Mirrors session bootstrap: select pomodoro mode and evaluate the
    /// empty state once so the surface starts from a consistent picture.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::SurfaceClosed`] if the surface is gone.
    pub async fn start(&mut self) -> Result<(), DeckError> {
        tracing::debug!("deck starting");
        self.send_timer_snapshot().await?;
        self.send(DeckMessage::EmptyState {
            empty: self.tasks.is_empty(),
        })
        .await
    }

    /// Read access to the timer state.
    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Read access to the task list.
    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Handle one event from the surface.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::SurfaceClosed`] if the surface is gone.
    pub async fn handle_event(&mut self, event: SurfaceEvent) -> Result<(), DeckError> {
        tracing::trace!(?event, "handling surface event");

        match event {
            SurfaceEvent::ModeSelected { mode } => {
                self.timer.set_mode(mode);
                self.send_timer_snapshot().await
            }

            SurfaceEvent::ResetPressed => {
                self.timer.reset();
                self.send_timer_snapshot().await
            }

            SurfaceEvent::StartPauseToggled => {
                let running = self.timer.toggle();
                self.send(DeckMessage::RunningChanged { running }).await
            }

            SurfaceEvent::Tick => match self.timer.tick() {
                TickOutcome::Idle => Ok(()),
                TickOutcome::Counted { remaining } => {
                    let clock = crate::timer::format_clock(remaining);
                    self.send(DeckMessage::ClockChanged {
                        minutes: clock.minutes,
                        seconds: clock.seconds,
                    })
                    .await
                }
                TickOutcome::Completed { finished, next } => {
                    tracing::debug!(%finished, %next, "countdown completed");
                    self.send(DeckMessage::Notify {
                        level: NotifyLevel::Info,
                        message: format!("{finished} finished - time for a {next}!"),
                    })
                    .await?;
                    self.send_timer_snapshot().await
                }
            },

            SurfaceEvent::TaskSubmitted { text } => match self.tasks.add(&text) {
                Ok(task) => {
                    self.send(DeckMessage::TaskAdded { task }).await?;
                    // The entry field is cleared on every successful add
                    self.send(DeckMessage::CharCount { count: 0 }).await?;
                    self.send(DeckMessage::EmptyState {
                        empty: self.tasks.is_empty(),
                    })
                    .await
                }
                Err(TaskError::EmptyText) => {
                    tracing::warn!("rejected empty task submission");
                    self.send(DeckMessage::Notify {
                        level: NotifyLevel::Warning,
                        message: "Please enter a task first.".to_string(),
                    })
                    .await
                }
            },

            SurfaceEvent::TaskDeleted { id } => {
                if self.tasks.remove(id).is_some() {
                    self.send(DeckMessage::TaskRemoved { id }).await?;
                    self.send(DeckMessage::EmptyState {
                        empty: self.tasks.is_empty(),
                    })
                    .await
                } else {
                    tracing::warn!(%id, "delete for unknown task");
                    Ok(())
                }
            }

            SurfaceEvent::InputChanged { text } => {
                self.send(DeckMessage::CharCount {
                    count: text.chars().count(),
                })
                .await
            }

            SurfaceEvent::QuitRequested => {
                tracing::debug!("quit requested");
                self.send(DeckMessage::Quit).await
            }
        }
    }

    /// Full timer refresh: mode indicator, clock digits, control label.
    ///
    /// Sent on every mode change, reset, and countdown completion, the
    /// same way the display is fully refreshed whenever a mode loads.
    async fn send_timer_snapshot(&self) -> Result<(), DeckError> {
        self.send(DeckMessage::ModeChanged {
            mode: self.timer.mode(),
        })
        .await?;

        let clock = self.timer.clock();
        self.send(DeckMessage::ClockChanged {
            minutes: clock.minutes,
            seconds: clock.seconds,
        })
        .await?;

        self.send(DeckMessage::RunningChanged {
            running: self.timer.is_running(),
        })
        .await
    }

    async fn send(&self, msg: DeckMessage) -> Result<(), DeckError> {
        self.tx.send(msg).await.map_err(|_| DeckError::SurfaceClosed)
    }
}
