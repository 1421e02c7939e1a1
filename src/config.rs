use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::surface::Color;

pub const COLOR_ORANGE: Color = [225, 138, 50, 255];
pub const COLOR_BLUE: Color = [111, 173, 162, 255];
pub const COLOR_DARKGRAY: Color = [80, 80, 80, 255];
pub const COLOR_BLACK: Color = [0, 0, 0, 255];
pub const COLOR_RAYWHITE: Color = [245, 245, 245, 255];

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "TABLE_CONFIG";

/// The four table colors. `text` is reserved for future cell labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: COLOR_BLUE,
            border: COLOR_DARKGRAY,
            text: COLOR_BLACK,
            selection: COLOR_ORANGE,
        }
    }
}

/// Startup configuration. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub rows: u32,
    pub cols: u32,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Entscheidungstabellen".to_string(),
            width: 900,
            height: 600,
            rows: 5,
            cols: 10,
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Loads the file named by `TABLE_CONFIG`, or the defaults when the
    /// variable is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.width, 900);
        assert_eq!(config.height, 600);
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 10);
        assert_eq!(config.theme.background, COLOR_BLUE);
        assert_eq!(config.theme.selection, COLOR_ORANGE);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"rows": 3}"#).unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 10);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn theme_round_trips_through_json() {
        let mut theme = Theme::default();
        theme.selection = [1, 2, 3, 255];
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            AppConfig::from_file("/nonexistent/table.json"),
            Err(ConfigError::Read(_))
        ));
    }
}
