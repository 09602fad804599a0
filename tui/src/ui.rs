//! Layout and Widgets
//!
//! Pure rendering: takes the display state and draws it. Top to bottom:
//! mode tabs, the clock with its start/pause label, the task entry field
//! with its character counter, the task list (or the "no tasks"
//! placeholder), and a key-hint status line. A pending alert renders as
//! a centered modal overlay on top of everything.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;

use pomodeck_core::{NotifyLevel, TimerMode};

use crate::app::Panel;
use crate::display::DisplayState;
use crate::theme;

/// Modes in tab order.
const MODES: [TimerMode; 3] = [
    TimerMode::Pomodoro,
    TimerMode::ShortBreak,
    TimerMode::LongBreak,
];

/// Draw one frame.
pub fn draw(frame: &mut Frame, state: &DisplayState, input: &str, focus: Panel) {
    let [tabs_area, clock_area, input_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_mode_tabs(frame, state, focus, tabs_area);
    draw_clock(frame, state, clock_area);
    draw_input(frame, state, input, focus, input_area);
    draw_task_list(frame, state, focus, list_area);
    draw_status(frame, state, status_area);

    if let Some(alert) = &state.alert {
        draw_alert(frame, alert.level, &alert.message);
    }
}

/// Mode tabs; exactly one is highlighted.
fn draw_mode_tabs(frame: &mut Frame, state: &DisplayState, focus: Panel, area: Rect) {
    let titles: Vec<Line> = MODES
        .iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("{} {}", i + 1, mode.label())))
        .collect();

    let selected = MODES
        .iter()
        .position(|m| *m == state.mode)
        .unwrap_or_default();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme::CHROME))
        .highlight_style(
            Style::default()
                .fg(theme::mode_color(state.mode))
                .add_modifier(Modifier::BOLD),
        )
        .block(pane_block("pomodeck", focus == Panel::Timer));

    frame.render_widget(tabs, area);
}

/// The countdown digits and the start/pause label.
fn draw_clock(frame: &mut Frame, state: &DisplayState, area: Rect) {
    let accent = theme::mode_color(state.mode);

    let digits = Line::from(Span::styled(
        format!("{}  :  {}", state.minutes, state.seconds),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));

    let control = if state.running { "[ PAUSE ]" } else { "[ START ]" };
    let control_line = Line::from(vec![
        Span::styled(control, Style::default().fg(accent)),
        Span::styled("  (Space)", Style::default().fg(theme::CHROME)),
    ]);

    let body = vec![
        Line::default(),
        digits,
        Line::default(),
        control_line,
    ];

    let clock = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::CHROME)));

    frame.render_widget(clock, area);
}

/// Task entry field with character counter.
fn draw_input(frame: &mut Frame, state: &DisplayState, input: &str, focus: Panel, area: Rect) {
    let focused = focus == Panel::Tasks;
    let cursor = if focused { "_" } else { "" };

    let field = Paragraph::new(Line::from(format!("{input}{cursor}")))
        .block(pane_block(
            &format!("New Task - {} chars", state.char_count),
            focused,
        ));

    frame.render_widget(field, area);
}

/// Task rows, or the placeholder when the list is empty.
fn draw_task_list(frame: &mut Frame, state: &DisplayState, focus: Panel, area: Rect) {
    let focused = focus == Panel::Tasks;
    let block = pane_block("Tasks", focused);

    if state.empty {
        let placeholder = Paragraph::new("No tasks yet - add one above.")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme::PLACEHOLDER)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|task| ListItem::new(format!("• {}", task.text)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("» ")
        .highlight_style(
            Style::default()
                .fg(theme::mode_color(state.mode))
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.selected));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Key-hint status line.
fn draw_status(frame: &mut Frame, state: &DisplayState, area: Rect) {
    let hints = format!(
        " {} | Tab switch pane | Space start/pause | r reset | 1/2/3 mode | Ctrl-D delete task | Esc quit",
        if state.running { "running" } else { "paused" },
    );

    let status = Paragraph::new(hints).style(Style::default().fg(theme::CHROME));
    frame.render_widget(status, area);
}

/// Centered modal overlay for a pending alert.
fn draw_alert(frame: &mut Frame, level: NotifyLevel, message: &str) {
    let border = match level {
        NotifyLevel::Info => theme::POMODORO_RED,
        NotifyLevel::Warning => theme::WARNING,
    };

    let area = centered_rect(frame.area(), 50, 5);

    let body = vec![
        Line::default(),
        Line::from(message.to_string()),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(theme::CHROME),
        )),
    ];

    let alert = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" pomodeck "),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { theme::FOCUS } else { theme::CHROME };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {title} "))
}

fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    let width = area.width * width_percent / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
