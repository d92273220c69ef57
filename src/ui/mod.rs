pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod settings_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use settings_pane::render_settings_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_timer_pane(f, app, layout.timer_area);
    render_history_pane(f, app, layout.history_area);

    // Settings panel draws over everything else
    render_settings_pane(f, app, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn draw(app: &AppState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_initial_state() {
        let app = AppState::new(Settings::default());
        let screen = draw(&app);

        assert!(screen.contains("Work Time"));
        assert!(screen.contains("25:00"));
        assert!(screen.contains("Start"));
        assert!(screen.contains("Cycle 1"));
        assert!(screen.contains("Nothing finished yet"));
        assert!(!screen.contains("Save Settings"));
    }

    #[test]
    fn test_render_running_and_completed() {
        let mut app = AppState::new(Settings {
            work_minutes: 1,
            break_minutes: 5,
            long_break_minutes: 15,
        });
        let t0 = Instant::now();
        app.start(t0);
        app.on_clock(t0 + Duration::from_secs(1));
        let screen = draw(&app);
        assert!(screen.contains("00:59"));
        assert!(screen.contains("Pause"));

        app.on_clock(t0 + Duration::from_secs(61));
        let screen = draw(&app);
        assert!(screen.contains("Break Time"));
        assert!(screen.contains("05:00"));
        assert!(screen.contains("Completed (1)"));
        assert!(screen.contains("Cycle 2"));
    }

    #[test]
    fn test_render_settings_panel() {
        let mut app = AppState::new(Settings::default());
        app.toggle_settings();
        app.settings_form_backspace();
        app.settings_form_backspace();
        let screen = draw(&app);

        assert!(screen.contains("Settings"));
        assert!(screen.contains("Work Time (minutes)"));
        assert!(screen.contains("Break Time (minutes)"));
        // "25" -> "2" is written through, then "" is rejected
        assert!(screen.contains("(keeping 2)"));
    }
}
