//! Startup configuration: built-in defaults, then config.json, then CLI flags.
//!
//! The file is only ever read. Changes made in the settings panel live for
//! the session and are gone on exit.

use crate::domain::{Settings, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {field} in {origin}: {source}")]
    Invalid {
        field: &'static str,
        origin: String,
        #[source]
        source: SettingsError,
    },
}

/// Contents of config.json. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub work_minutes: u32,
    pub break_minutes: u32,
    pub long_break_minutes: u32,
}

impl Default for FileConfig {
    fn default() -> Self {
        let defaults = Settings::default();
        Self {
            work_minutes: defaults.work_minutes,
            break_minutes: defaults.break_minutes,
            long_break_minutes: defaults.long_break_minutes,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub work_minutes: Option<u32>,
    pub break_minutes: Option<u32>,
    pub long_break_minutes: Option<u32>,
}

/// Default config path: $XDG_CONFIG_HOME/tomato/config.json (or platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tomato").join("config.json"))
}

/// Load config.json. A missing file yields the defaults.
pub fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge file values with CLI overrides and validate the result
pub fn resolve_settings(
    file: &FileConfig,
    overrides: &Overrides,
    origin: &str,
) -> Result<Settings, ConfigError> {
    let pick = |field: &'static str, cli: Option<u32>, from_file: u32| {
        let (value, source) = match cli {
            Some(value) => (value, "command line".to_string()),
            None => (from_file, origin.to_string()),
        };
        if value == 0 {
            return Err(ConfigError::Invalid {
                field,
                origin: source,
                source: SettingsError::NotPositive,
            });
        }
        Ok(value)
    };

    Ok(Settings {
        work_minutes: pick("work_minutes", overrides.work_minutes, file.work_minutes)?,
        break_minutes: pick("break_minutes", overrides.break_minutes, file.break_minutes)?,
        long_break_minutes: pick(
            "long_break_minutes",
            overrides.long_break_minutes,
            file.long_break_minutes,
        )?,
    })
}

/// Settings the app starts with, and where the file values came from.
///
/// An explicit path must exist; a missing default path just means no file.
pub fn load_settings(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
    overrides: &Overrides,
) -> Result<(Settings, String), ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => Some(path.to_path_buf()),
        None => default_path,
    };

    let (file_config, origin) = match &path {
        Some(path) => (load_file_config(path)?, path.display().to_string()),
        None => (FileConfig::default(), "defaults".to_string()),
    };

    let settings = resolve_settings(&file_config, overrides, &origin)?;
    Ok((settings, origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load_file_config(&path).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "work_minutes": 50 }"#).unwrap();

        let config = load_file_config(&path).unwrap();
        assert_eq!(config.work_minutes, 50);
        assert_eq!(config.break_minutes, 5);
        assert_eq!(config.long_break_minutes, 15);
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_file_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_negative_value_is_parse_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "break_minutes": -5 }"#).unwrap();

        assert!(matches!(
            load_file_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nope.json");

        let err = load_settings(Some(path.as_path()), None, &Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(ref p) if *p == path));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_missing_default_path_uses_defaults_with_overrides() {
        let temp_dir = tempdir().unwrap();
        let default_path = temp_dir.path().join("tomato").join("config.json");
        let overrides = Overrides {
            work_minutes: Some(45),
            ..Overrides::default()
        };

        let (settings, origin) =
            load_settings(None, Some(default_path.clone()), &overrides).unwrap();
        assert_eq!(
            settings,
            Settings {
                work_minutes: 45,
                break_minutes: 5,
                long_break_minutes: 15,
            }
        );
        assert_eq!(origin, default_path.display().to_string());

        let (settings, origin) = load_settings(None, None, &Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(origin, "defaults");
    }

    #[test]
    fn test_explicit_path_takes_precedence() {
        let temp_dir = tempdir().unwrap();
        let explicit = temp_dir.path().join("mine.json");
        let default_path = temp_dir.path().join("config.json");
        std::fs::write(&explicit, r#"{ "break_minutes": 12 }"#).unwrap();
        std::fs::write(&default_path, r#"{ "break_minutes": 3 }"#).unwrap();

        let overrides = Overrides::default();
        let (settings, _) =
            load_settings(Some(explicit.as_path()), Some(default_path), &overrides).unwrap();
        assert_eq!(settings.break_minutes, 12);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            work_minutes: 40,
            break_minutes: 10,
            long_break_minutes: 20,
        };
        let overrides = Overrides {
            break_minutes: Some(7),
            ..Overrides::default()
        };

        let settings = resolve_settings(&file, &overrides, "config.json").unwrap();
        assert_eq!(
            settings,
            Settings {
                work_minutes: 40,
                break_minutes: 7,
                long_break_minutes: 20,
            }
        );
    }

    #[test]
    fn test_zero_rejected_with_origin() {
        let file = FileConfig {
            work_minutes: 0,
            ..FileConfig::default()
        };
        let err = resolve_settings(&file, &Overrides::default(), "my.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid work_minutes in my.json: must be at least 1 minute"
        );

        let overrides = Overrides {
            long_break_minutes: Some(0),
            ..Overrides::default()
        };
        let err = resolve_settings(&FileConfig::default(), &overrides, "my.json").unwrap_err();
        assert!(err.to_string().contains("command line"));
    }
}
