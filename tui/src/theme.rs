//! Theme and Colors
//!
//! Pomodeck's palette: tomato red for work, greens for recovery, muted
//! grays for chrome so the clock stays the visual anchor.

use ratatui::style::Color;

use pomodeck_core::TimerMode;

/// Pomodoro work mode - tomato red.
pub const POMODORO_RED: Color = Color::Rgb(229, 85, 78);

/// Short break - soft green.
pub const SHORT_BREAK_GREEN: Color = Color::Rgb(120, 190, 140);

/// Long break - calm teal.
pub const LONG_BREAK_TEAL: Color = Color::Rgb(95, 170, 190);

/// Borders, separators, hints.
pub const CHROME: Color = Color::Rgb(110, 110, 110);

/// Focused pane border.
pub const FOCUS: Color = Color::Rgb(230, 200, 120);

/// Validation warnings.
pub const WARNING: Color = Color::Rgb(235, 195, 90);

/// "No tasks yet" placeholder.
pub const PLACEHOLDER: Color = Color::Rgb(130, 130, 130);

/// Accent color for the given timer mode.
#[must_use]
pub fn mode_color(mode: TimerMode) -> Color {
    match mode {
        TimerMode::Pomodoro => POMODORO_RED,
        TimerMode::ShortBreak => SHORT_BREAK_GREEN,
        TimerMode::LongBreak => LONG_BREAK_TEAL,
    }
}
