//! Pomodeck TUI - Terminal surface for pomodeck
//!
//! This crate provides a full-screen terminal UI for the pomodeck core:
//! a pomodoro countdown with three fixed modes and a session task list.
//!
//! # Architecture
//!
//! The TUI is a thin client over `pomodeck-core`:
//!
//! - **App**: event loop turning key presses into `SurfaceEvent`s
//! - **DisplayState**: render state derived from `DeckMessage`s
//! - **ui**: ratatui layout and widgets
//! - **notify**: desktop notification mirror for period-end alerts

pub mod app;
pub mod display;
pub mod notify;
pub mod theme;
pub mod ui;

pub use app::App;
