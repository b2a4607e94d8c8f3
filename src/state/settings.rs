/// User settings for the portfolio window
///
/// Settings are read once at startup from
/// `<config dir>/sketch-room/settings.json`. Every field is optional;
/// anything left out keeps its default. Navigation state is never
/// written back.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::state::carousel::DEFAULT_INTERVAL_MS;

/// Shortest carousel interval we accept from the settings file
const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;

/// Longest carousel interval, one hour
const MAX_CAROUSEL_INTERVAL_MS: u64 = 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Colour scheme of the window
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    /// Cream paper and ink
    #[default]
    Sketchbook,
    Dark,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Time between home carousel advances, in milliseconds
    pub carousel_interval_ms: u64,

    pub theme: ThemeChoice,

    /// `tracing` filter used when RUST_LOG is not set
    pub log_filter: String,

    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel_interval_ms: DEFAULT_INTERVAL_MS,
            theme: ThemeChoice::Sketchbook,
            log_filter: "info".to_string(),
            window_width: 1280.0,
            window_height: 900.0,
        }
    }
}

impl Settings {
    /// Location of the settings file, if the platform has a config directory
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("sketch-room");
        path.push("settings.json");
        Some(path)
    }

    /// Load settings from the default location.
    ///
    /// A missing file (or a platform without a config directory) is not
    /// an error and yields the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: PathBuf) -> Result<Self, SettingsError> {
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(SettingsError::Io { path, source }),
        };

        Self::from_json(&json).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert to a JSON string
    #[cfg(test)]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Carousel interval clamped to a sane range
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(
            self.carousel_interval_ms
                .clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_matches_carousel() {
        let settings = Settings::default();
        assert_eq!(settings.carousel_interval(), Duration::from_millis(DEFAULT_INTERVAL_MS));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{"theme": "dark", "unknown": 1}"#).unwrap();

        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.carousel_interval_ms, 4500);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_interval_is_clamped() {
        let settings = Settings::from_json(r#"{"carousel_interval_ms": 10}"#).unwrap();
        assert_eq!(settings.carousel_interval(), Duration::from_millis(500));

        let settings = Settings::from_json(r#"{"carousel_interval_ms": 18446744073709551615}"#).unwrap();
        assert_eq!(settings.carousel_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_serialization() {
        let mut settings = Settings::default();
        settings.carousel_interval_ms = 3000;
        settings.window_width = 1024.0;

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("sketch-room-missing/settings.json");
        let settings = Settings::load_from(path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "sketch-room-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from(path.clone());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }
}
