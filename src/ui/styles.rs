use crate::domain::Mode;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Accent colour for each mode
pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Magenta,
        Mode::Break => Color::Green,
        Mode::LongBreak => Color::Cyan,
    }
}

/// Countdown digits
pub fn clock_style(mode: Mode, running: bool) -> Style {
    let style = Style::default()
        .fg(mode_color(mode))
        .add_modifier(Modifier::BOLD);
    if running {
        style
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

/// Running status style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Paused status style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Progress gauge style
pub fn gauge_style(mode: Mode) -> Style {
    Style::default().fg(mode_color(mode)).bg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Completed interval style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}
