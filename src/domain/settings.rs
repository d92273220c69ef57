use super::enums::Mode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

/// Rejected duration input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("enter a number of minutes")]
    Empty,
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("must be at least 1 minute")]
    NotPositive,
    #[error("'{0}' is too large")]
    TooLarge(String),
}

/// Configured interval lengths in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub work_minutes: u32,
    pub break_minutes: u32,
    pub long_break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

impl Settings {
    /// Minutes loaded at the start of a fresh interval in `mode`
    pub fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes,
            Mode::Break => self.break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }
}

/// Parse a duration field. Accepts base-10 integers >= 1 that fit in u32.
pub fn parse_minutes(input: &str) -> Result<u32, SettingsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::Empty);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(SettingsError::NotANumber(trimmed.to_string()));
    }
    let minutes: u32 = trimmed
        .parse()
        .map_err(|_| SettingsError::TooLarge(trimmed.to_string()))?;
    if minutes == 0 {
        return Err(SettingsError::NotPositive);
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.work_minutes, 25);
        assert_eq!(settings.break_minutes, 5);
        assert_eq!(settings.long_break_minutes, 15);
    }

    #[test]
    fn test_minutes_for_mode() {
        let settings = Settings::default();
        assert_eq!(settings.minutes_for(Mode::Work), 25);
        assert_eq!(settings.minutes_for(Mode::Break), 5);
        assert_eq!(settings.minutes_for(Mode::LongBreak), 15);
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("10"), Ok(10));
        assert_eq!(parse_minutes(" 45 "), Ok(45));
        assert_eq!(parse_minutes("007"), Ok(7));
        assert_eq!(parse_minutes(""), Err(SettingsError::Empty));
        assert_eq!(parse_minutes("0"), Err(SettingsError::NotPositive));
        assert_eq!(
            parse_minutes("-3"),
            Err(SettingsError::NotANumber("-3".to_string()))
        );
        assert_eq!(
            parse_minutes("abc"),
            Err(SettingsError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_minutes("99999999999"),
            Err(SettingsError::TooLarge("99999999999".to_string()))
        );
    }
}
