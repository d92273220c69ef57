use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, area: Rect) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" Space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("s settings   "),
            Span::raw("q quit"),
        ]),
        UiMode::EditingSettings => Line::from(vec![
            Span::raw(" 0-9 type   "),
            Span::raw("Tab switch field   "),
            Span::raw("Enter save   "),
            Span::raw("Esc close"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
