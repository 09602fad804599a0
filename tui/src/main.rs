//! pomodeck - pomodoro timer and session task list for the terminal
//!
//! # Usage
//!
//! ```bash
//! # Start the TUI
//! pomodeck
//!
//! # With verbose logging
//! RUST_LOG=debug pomodeck
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)
//! - `POMODECK_LOG`: Log file path (default: `pomodeck.log` in the temp dir)
//!
//! Logs go to a file rather than stderr so they never corrupt the
//! alternate-screen UI.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use pomodeck_tui::App;

fn log_path() -> PathBuf {
    if let Ok(path) = std::env::var("POMODECK_LOG") {
        return PathBuf::from(path);
    }
    std::env::temp_dir().join("pomodeck.log")
}

fn init_tracing() -> anyhow::Result<()> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    // Restore the terminal even if rendering panics
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal).await;

    restore_terminal();
    result
}
