use crate::domain::{
    parse_minutes, CompletedInterval, Completion, FormField, Mode, Settings, SettingsError,
    TimerState, UiMode,
};
use crate::ticker::Ticker;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Settings panel state.
///
/// The text buffers are what the two inputs display. Valid input is written
/// straight through to the live settings on every keystroke; nothing here is
/// a draft copy.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub is_open: bool,
    pub active_field: FormField,
    pub work_input: String,
    pub break_input: String,
    pub work_error: Option<SettingsError>,
    pub break_error: Option<SettingsError>,
}

impl SettingsForm {
    fn closed(settings: &Settings) -> Self {
        Self {
            is_open: false,
            active_field: FormField::Work,
            work_input: settings.work_minutes.to_string(),
            break_input: settings.break_minutes.to_string(),
            work_error: None,
            break_error: None,
        }
    }

    pub fn input(&self, field: FormField) -> &str {
        match field {
            FormField::Work => &self.work_input,
            FormField::Break => &self.break_input,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&SettingsError> {
        match field {
            FormField::Work => self.work_error.as_ref(),
            FormField::Break => self.break_error.as_ref(),
        }
    }

    fn input_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Work => &mut self.work_input,
            FormField::Break => &mut self.break_input,
        }
    }

    fn error_mut(&mut self, field: FormField) -> &mut Option<SettingsError> {
        match field {
            FormField::Work => &mut self.work_error,
            FormField::Break => &mut self.break_error,
        }
    }
}

/// Main application state
pub struct AppState {
    pub timer: TimerState,
    pub ticker: Ticker,
    pub ui_mode: UiMode,
    pub settings_form: SettingsForm,
    /// Completed intervals, oldest first
    pub history: Vec<CompletedInterval>,
    pub completed_work_sessions: u32,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            timer: TimerState::new(settings),
            ticker: Ticker::new(),
            ui_mode: UiMode::Normal,
            settings_form: SettingsForm::closed(&settings),
            history: Vec::new(),
            completed_work_sessions: 0,
        }
    }

    /// Cycle number shown in the status line (1-based)
    pub fn current_cycle(&self) -> u32 {
        self.completed_work_sessions + 1
    }

    /// Keep the ticker armed exactly while the timer runs
    fn sync_ticker(&mut self, now: Instant) {
        match (self.timer.is_running(), self.ticker.is_armed()) {
            (true, false) => {
                self.ticker.arm(now);
                debug!("ticker armed");
            }
            (false, true) => {
                self.ticker.disarm();
                debug!("ticker disarmed");
            }
            _ => {}
        }
    }

    pub fn start(&mut self, now: Instant) {
        if !self.timer.is_running() {
            info!(mode = ?self.timer.mode(), remaining = %self.timer.display(), "timer started");
        }
        self.timer.start();
        self.sync_ticker(now);
    }

    pub fn pause(&mut self, now: Instant) {
        if self.timer.is_running() {
            info!(mode = ?self.timer.mode(), remaining = %self.timer.display(), "timer paused");
        }
        self.timer.pause();
        self.sync_ticker(now);
    }

    /// Start/pause control
    pub fn toggle_run_pause(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.timer.reset();
        self.sync_ticker(now);
        info!(mode = ?self.timer.mode(), remaining = %self.timer.display(), "timer reset");
    }

    /// Fire every tick that has come due by `now`
    pub fn on_clock(&mut self, now: Instant) {
        let due = self.ticker.due(now);
        for _ in 0..due {
            if let Some(completion) = self.timer.tick() {
                self.record_completion(completion);
            }
            // Completion stops the timer; the rest of this batch is dropped
            if !self.timer.is_running() {
                break;
            }
        }
        self.sync_ticker(now);
    }

    fn record_completion(&mut self, completion: Completion) {
        if completion.finished == Mode::Work {
            self.completed_work_sessions += 1;
        }
        self.history
            .push(CompletedInterval::new(completion.finished, completion.minutes));
        info!(
            finished = ?completion.finished,
            next = ?completion.next,
            remaining = %self.timer.display(),
            "interval complete"
        );
    }

    /// Open or close the settings panel
    pub fn toggle_settings(&mut self) {
        if self.settings_form.is_open {
            self.close_settings();
        } else {
            self.open_settings();
        }
    }

    fn open_settings(&mut self) {
        self.settings_form = SettingsForm::closed(self.timer.settings());
        self.settings_form.is_open = true;
        self.ui_mode = UiMode::EditingSettings;
    }

    /// Close the panel without resetting the countdown
    pub fn close_settings(&mut self) {
        self.settings_form.is_open = false;
        self.ui_mode = UiMode::Normal;
    }

    /// Move the cursor to the other input
    pub fn settings_form_next_field(&mut self) {
        self.settings_form.active_field = self.settings_form.active_field.next();
    }

    /// Type a character into the active input. Only digits are accepted.
    pub fn settings_form_add_char(&mut self, c: char) {
        if !self.settings_form.is_open || !c.is_ascii_digit() {
            return;
        }
        let field = self.settings_form.active_field;
        self.settings_form.input_mut(field).push(c);
        self.write_through(field);
    }

    /// Delete the last character of the active input
    pub fn settings_form_backspace(&mut self) {
        if !self.settings_form.is_open {
            return;
        }
        let field = self.settings_form.active_field;
        self.settings_form.input_mut(field).pop();
        self.write_through(field);
    }

    /// Parse the field and overwrite the live setting if it is valid.
    /// Invalid text leaves the previous value in place.
    fn write_through(&mut self, field: FormField) {
        match parse_minutes(self.settings_form.input(field)) {
            Ok(minutes) => {
                match field {
                    FormField::Work => self.timer.set_work_minutes(minutes),
                    FormField::Break => self.timer.set_break_minutes(minutes),
                }
                *self.settings_form.error_mut(field) = None;
                debug!(?field, minutes, "setting updated");
            }
            Err(err) => {
                warn!(?field, error = %err, "setting input rejected");
                *self.settings_form.error_mut(field) = Some(err);
            }
        }
    }

    /// Close the panel and restart the interval with the current settings
    pub fn save_settings(&mut self, now: Instant) {
        self.close_settings();
        let settings = self.timer.settings();
        info!(
            work = settings.work_minutes,
            brk = settings.break_minutes,
            "settings saved"
        );
        self.reset(now);
    }
}
