use crate::app::AppState;
use crate::domain::CompletedInterval;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Create a line for a completed interval
fn create_history_line(entry: &CompletedInterval) -> Line<'static> {
    Line::from(vec![
        Span::styled("✓ ", done_style()),
        Span::raw(format!("{} ", entry.mode.symbol())),
        Span::styled(entry.summary(), default_style()),
    ])
}

/// Render the completed-intervals pane, newest first
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = if app.history.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Nothing finished yet",
            hint_style(),
        )))]
    } else {
        app.history
            .iter()
            .rev()
            .map(|entry| ListItem::new(create_history_line(entry)))
            .collect()
    };

    let title = format!(" Completed ({}) ", app.history.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
