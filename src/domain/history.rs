use super::enums::Mode;
use chrono::{DateTime, Local};

/// One interval that ran all the way down to zero
#[derive(Debug, Clone)]
pub struct CompletedInterval {
    pub mode: Mode,
    /// Configured length at the moment it finished
    pub minutes: u32,
    pub completed_at: DateTime<Local>,
}

impl CompletedInterval {
    pub fn new(mode: Mode, minutes: u32) -> Self {
        Self {
            mode,
            minutes,
            completed_at: Local::now(),
        }
    }

    /// Line shown in the history pane, e.g. "14:05  Work Time (25m)"
    pub fn summary(&self) -> String {
        format!(
            "{}  {} ({}m)",
            self.completed_at.format("%H:%M"),
            self.mode.title(),
            self.minutes
        )
    }
}
