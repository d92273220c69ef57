use super::enums::Mode;
use super::settings::Settings;

/// Result of a countdown reaching zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Mode whose interval just finished
    pub finished: Mode,
    /// Mode loaded for the next interval
    pub next: Mode,
    /// Length the finished interval was loaded with
    pub minutes: u32,
}

/// Pick the mode and starting minutes that follow a finished interval.
///
/// LongBreak is never produced here; it is only reachable by resetting
/// while already in LongBreak.
pub fn next_interval(mode: Mode, settings: &Settings) -> (Mode, u32) {
    match mode {
        Mode::Work => (Mode::Break, settings.break_minutes),
        Mode::Break | Mode::LongBreak => (Mode::Work, settings.work_minutes),
    }
}

/// The countdown and everything that determines it.
///
/// Fields are read freely but only change through the methods below, so
/// minutes and seconds always move together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    mode: Mode,
    remaining_minutes: u32,
    remaining_seconds: u32,
    is_running: bool,
    /// Minutes the current interval was loaded with
    interval_minutes: u32,
    settings: Settings,
}

impl TimerState {
    /// Fresh timer: Work mode, full work interval, not running
    pub fn new(settings: Settings) -> Self {
        Self {
            mode: Mode::Work,
            remaining_minutes: settings.work_minutes,
            remaining_seconds: 0,
            is_running: false,
            interval_minutes: settings.work_minutes,
            settings,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_minutes(&self) -> u32 {
        self.remaining_minutes
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Overwrite the work duration. Takes effect on the next reset or transition.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.settings.work_minutes = minutes;
    }

    /// Overwrite the break duration. Takes effect on the next reset or transition.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.settings.break_minutes = minutes;
    }

    pub fn start(&mut self) {
        self.is_running = true;
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Advance the countdown by one second.
    ///
    /// Does nothing while paused, so a stray tick after a pause or after
    /// completion can never transition twice.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.is_running {
            return None;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            None
        } else if self.remaining_minutes > 0 {
            self.remaining_minutes -= 1;
            self.remaining_seconds = 59;
            None
        } else {
            self.is_running = false;
            let finished = self.mode;
            let ran = self.interval_minutes;
            let (next, minutes) = next_interval(finished, &self.settings);
            self.mode = next;
            self.interval_minutes = minutes;
            self.remaining_minutes = minutes;
            self.remaining_seconds = 0;
            Some(Completion {
                finished,
                next,
                minutes: ran,
            })
        }
    }

    /// Stop and reload the full interval for the current mode
    pub fn reset(&mut self) {
        self.is_running = false;
        self.interval_minutes = self.settings.minutes_for(self.mode);
        self.remaining_minutes = self.interval_minutes;
        self.remaining_seconds = 0;
    }

    /// Remaining time as MM:SS
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining_minutes, self.remaining_seconds)
    }

    /// Fraction of the current interval already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        let total = u64::from(self.interval_minutes) * 60;
        if total == 0 {
            return 0.0;
        }
        let remaining =
            u64::from(self.remaining_minutes) * 60 + u64::from(self.remaining_seconds);
        (1.0 - remaining as f64 / total as f64).clamp(0.0, 1.0)
    }
}
