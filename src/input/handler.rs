use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let now = Instant::now();
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::EditingSettings => handle_settings_mode(app, key, now),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        // Start/pause
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_run_pause(now);
            Ok(false)
        }

        // Reset current interval
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset(now);
            Ok(false)
        }

        // Open settings panel
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_settings();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the settings panel is open
fn handle_settings_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.save_settings(now);
            Ok(false)
        }

        KeyCode::Esc => {
            app.close_settings();
            Ok(false)
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.settings_form_next_field();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.settings_form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.settings_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}
