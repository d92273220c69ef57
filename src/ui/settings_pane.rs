use crate::app::AppState;
use crate::domain::FormField;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Lines for one labelled input, with cursor and validation message
fn field_lines(app: &AppState, field: FormField) -> Vec<Line<'static>> {
    let form = &app.settings_form;
    let is_active = form.active_field == field;

    let label = if is_active {
        format!("{}: (editing)", field.label())
    } else {
        format!("{}:", field.label())
    };

    let input_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(form.input(field).to_string(), modal_title_style()),
        if is_active {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    let message = match form.error(field) {
        Some(err) => Line::from(Span::styled(
            format!("  {} (keeping {})", err, current_value(app, field)),
            error_style(),
        )),
        None => Line::raw(""),
    };

    vec![Line::raw(label), input_line, message]
}

fn current_value(app: &AppState, field: FormField) -> u32 {
    let settings = app.timer.settings();
    match field {
        FormField::Work => settings.work_minutes,
        FormField::Break => settings.break_minutes,
    }
}

/// Render the settings panel
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    if !app.settings_form.is_open {
        return;
    }

    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines(app, FormField::Work));
    lines.extend(field_lines(app, FormField::Break));
    lines.push(Line::from(vec![
        Span::styled("[Enter]", modal_title_style()),
        Span::raw(" Save Settings  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Close"),
    ]));
    lines.push(Line::from(Span::styled(
        "Saving restarts the current interval.",
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Settings ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
