pub mod enums;
pub mod history;
pub mod settings;
pub mod timer;

pub use enums::{FormField, Mode, UiMode};
pub use history::CompletedInterval;
pub use settings::{parse_minutes, Settings, SettingsError};
pub use timer::{Completion, TimerState};
