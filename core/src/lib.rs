//! Pomodeck Core - Headless Timer and Task Orchestration
//!
//! This crate provides the timer and task-list logic for pomodeck,
//! completely independent of any UI framework. It can drive a TUI, a
//! desktop shell, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                   UI Surfaces                     │
//! │    ┌─────────┐           ┌────────────────────┐  │
//! │    │   TUI   │           │      Headless      │  │
//! │    │(ratatui)│           │     (testing)      │  │
//! │    └────┬────┘           └─────────┬──────────┘  │
//! │         └─────────────┬────────────┘             │
//! │                SurfaceEvent (up)                 │
//! │                DeckMessage (down)                │
//! └───────────────────────┼──────────────────────────┘
//!                         │
//! ┌───────────────────────┼──────────────────────────┐
//! │                 POMODECK CORE                     │
//! │  ┌────────────────────┴───────────────────────┐  │
//! │  │                   Deck                     │  │
//! │  │      ┌──────────┐       ┌──────────┐       │  │
//! │  │      │  Timer   │       │   Task   │       │  │
//! │  │      │ (modes)  │       │   List   │       │  │
//! │  │      └──────────┘       └──────────┘       │  │
//! │  └────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Deck`]: owns the timer and task list; all mutation routes through
//!   [`Deck::handle_event`]
//! - [`SurfaceEvent`]: events sent from UI surfaces to the deck
//! - [`DeckMessage`]: messages sent from the deck to UI surfaces
//! - [`Timer`]: the countdown state machine with its three fixed modes
//! - [`TaskList`]: ordered task collection with stable ids
//!
//! # Quick Start
//!
//! ```ignore
//! use pomodeck_core::{Deck, SurfaceEvent, TimerMode};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (mut deck, mut rx) = Deck::new();
//!     deck.start().await.unwrap();
//!
//!     deck.handle_event(SurfaceEvent::StartPauseToggled).await.unwrap();
//!
//!     loop {
//!         // Drive one tick per second from the host scheduler
//!         deck.handle_event(SurfaceEvent::Tick).await.unwrap();
//!
//!         while let Ok(msg) = rx.try_recv() {
//!             // Render message to UI
//!         }
//!     }
//! }
//! ```
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any
//! other UI framework. It is pure state logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod deck;
pub mod events;
pub mod messages;
pub mod tasks;
pub mod timer;

// Re-exports for convenience
pub use deck::{Deck, DeckError};
pub use events::SurfaceEvent;
pub use messages::{DeckMessage, NotifyLevel};
pub use tasks::{Task, TaskError, TaskId, TaskList};
pub use timer::{format_clock, Clock, TickOutcome, Timer, TimerMode};
