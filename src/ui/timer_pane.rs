use crate::app::AppState;
use crate::ui::styles::{
    border_style, clock_style, default_style, gauge_style, mode_color, paused_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Labels for the three buttons; the first follows the running flag
pub fn control_labels(running: bool) -> [&'static str; 3] {
    let toggle = if running { "⏸ Pause" } else { "▶ Start" };
    [toggle, "↺ Reset", "⚙ Settings"]
}

/// Render the mode title, countdown, progress and controls
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = &app.timer;
    let mode = timer.mode();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(format!(" {} ", mode.title()), title_style()))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // clock
            Constraint::Length(1), // spacer
            Constraint::Length(1), // status
            Constraint::Length(1), // spacer
            Constraint::Length(1), // progress
            Constraint::Length(1), // spacer
            Constraint::Length(1), // controls
            Constraint::Min(0),
        ])
        .split(inner);

    let clock = Paragraph::new(Line::from(Span::styled(
        timer.display(),
        clock_style(mode, timer.is_running()),
    )))
    .alignment(Alignment::Center);
    f.render_widget(clock, rows[1]);

    let (state_text, state_style) = if timer.is_running() {
        ("running", running_style())
    } else {
        ("paused", paused_style())
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(format!("Cycle {}", app.current_cycle()), default_style()),
        Span::raw("  ·  "),
        Span::styled(state_text, state_style),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(status, rows[3]);

    let gauge_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(rows[5])[1];
    let gauge = Gauge::default()
        .gauge_style(gauge_style(mode))
        .ratio(timer.progress_ratio())
        .label("");
    f.render_widget(gauge, gauge_area);

    let button = Style::default()
        .fg(mode_color(mode))
        .add_modifier(Modifier::BOLD);
    let [toggle, reset, settings] = control_labels(timer.is_running());
    let controls = Paragraph::new(Line::from(vec![
        Span::styled(format!("[{}]", toggle), button),
        Span::raw("   "),
        Span::styled(format!("[{}]", reset), default_style()),
        Span::raw("   "),
        Span::styled(format!("[{}]", settings), default_style()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(controls, rows[7]);
}
