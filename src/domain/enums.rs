/// Which kind of interval the countdown is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Work,
    Break,
    LongBreak,
}

impl Mode {
    /// Title shown above the countdown
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Work => "Work Time",
            Mode::Break => "Break Time",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Short symbol for the history pane
    pub fn symbol(&self) -> &'static str {
        match self {
            Mode::Work => "💼",
            Mode::Break => "☕",
            Mode::LongBreak => "🌙",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingSettings,
}

/// Editable field of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Work,
    Break,
}

impl FormField {
    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Work => "Work Time (minutes)",
            FormField::Break => "Break Time (minutes)",
        }
    }

    /// The other field (Tab / arrows cycle between the two)
    pub fn next(&self) -> Self {
        match self {
            FormField::Work => FormField::Break,
            FormField::Break => FormField::Work,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_title() {
        assert_eq!(Mode::Work.title(), "Work Time");
        assert_eq!(Mode::Break.title(), "Break Time");
        assert_eq!(Mode::LongBreak.title(), "Long Break");
    }

    #[test]
    fn test_form_field_next_cycles() {
        assert_eq!(FormField::Work.next(), FormField::Break);
        assert_eq!(FormField::Break.next(), FormField::Work);
    }
}
