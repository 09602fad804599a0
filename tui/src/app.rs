//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard + the one-second tick)
//! - Embedded deck for orchestration
//! - DisplayState for rendering
//!
//! The App converts terminal events to `SurfaceEvent`s, sends them to the
//! deck, receives `DeckMessage`s into the `DisplayState`, and renders.
//! The single `tokio::time::interval` below is the only tick driver in
//! the process; the deck ignores ticks while paused, so pausing can never
//! leave a stale ticker double-decrementing the countdown.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use pomodeck_core::{Deck, DeckMessage, NotifyLevel, SurfaceEvent, TimerMode};

use crate::display::DisplayState;
use crate::notify;
use crate::ui;

/// Which pane has keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    /// Timer pane: mode select, start/pause, reset.
    Timer,
    /// Tasks pane: entry field, selection, delete.
    Tasks,
}

impl Panel {
    /// The other pane.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Timer => Self::Tasks,
            Self::Tasks => Self::Timer,
        }
    }
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The embedded orchestration core
    deck: Deck,
    /// Messages from the deck
    rx: mpsc::Receiver<DeckMessage>,
    /// Display state derived from deck messages
    display: DisplayState,
    /// Task entry buffer
    input: String,
    /// Focused pane
    focus: Panel,
}

impl App {
    /// Create a new App with an embedded deck.
    #[must_use]
    pub fn new() -> Self {
        let (deck, rx) = Deck::new();
        Self {
            running: true,
            deck,
            rx,
            display: DisplayState::new(),
            input: String::new(),
            focus: Panel::Timer,
        }
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        self.deck.start().await?;

        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut events = EventStream::new();

        while self.running {
            self.pump_messages();

            if self.display.quitting {
                self.running = false;
                break;
            }

            terminal.draw(|frame| ui::draw(frame, &self.display, &self.input, self.focus))?;

            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        // Only handle Press events (not Release or Repeat)
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(key).await?;
                        }
                    }
                }

                _ = ticker.tick() => {
                    self.deck.handle_event(SurfaceEvent::Tick).await?;
                }
            }
        }

        Ok(())
    }

    /// Drain pending deck messages into the display state.
    fn pump_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match &msg {
                // A successful add clears the entry field
                DeckMessage::TaskAdded { .. } => self.input.clear(),
                // Period-end alerts also go to the desktop
                DeckMessage::Notify {
                    level: NotifyLevel::Info,
                    message,
                } => notify::send_desktop("pomodeck", message),
                _ => {}
            }
            self.display.apply_message(msg);
        }
    }

    /// Handle keyboard input.
    async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        // A pending alert is modal: the next key press dismisses it and
        // is otherwise swallowed.
        if self.display.dismiss_alert() {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.deck.handle_event(SurfaceEvent::QuitRequested).await?;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.deck.handle_event(SurfaceEvent::QuitRequested).await?;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggled();
            }
            _ => match self.focus {
                Panel::Timer => self.handle_timer_key(key).await?,
                Panel::Tasks => self.handle_tasks_key(key).await?,
            },
        }

        Ok(())
    }

    /// Keys while the timer pane is focused.
    async fn handle_timer_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let event = match key.code {
            KeyCode::Char(' ') => Some(SurfaceEvent::StartPauseToggled),
            KeyCode::Char('r') => Some(SurfaceEvent::ResetPressed),
            KeyCode::Char('1') => Some(SurfaceEvent::ModeSelected {
                mode: TimerMode::Pomodoro,
            }),
            KeyCode::Char('2') => Some(SurfaceEvent::ModeSelected {
                mode: TimerMode::ShortBreak,
            }),
            KeyCode::Char('3') => Some(SurfaceEvent::ModeSelected {
                mode: TimerMode::LongBreak,
            }),
            _ => None,
        };

        if let Some(event) = event {
            self.deck.handle_event(event).await?;
        }
        Ok(())
    }

    /// Keys while the tasks pane is focused.
    async fn handle_tasks_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Enter => {
                self.deck
                    .handle_event(SurfaceEvent::TaskSubmitted {
                        text: self.input.clone(),
                    })
                    .await?;
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_selected().await?;
            }
            KeyCode::Delete => {
                self.delete_selected().await?;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.send_input_changed().await?;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.send_input_changed().await?;
            }
            KeyCode::Up => self.display.select_prev(),
            KeyCode::Down => self.display.select_next(),
            _ => {}
        }
        Ok(())
    }

    async fn delete_selected(&mut self) -> anyhow::Result<()> {
        if let Some(task) = self.display.selected_task() {
            let id = task.id;
            self.deck
                .handle_event(SurfaceEvent::TaskDeleted { id })
                .await?;
        }
        Ok(())
    }

    async fn send_input_changed(&mut self) -> anyhow::Result<()> {
        self.deck
            .handle_event(SurfaceEvent::InputChanged {
                text: self.input.clone(),
            })
            .await?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
