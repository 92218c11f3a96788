//! TOML configuration.
//!
//! Everything defaults: a missing or partial file always yields a
//! usable config. A file named explicitly on the command line is loaded
//! strictly instead, so typos surface as errors rather than silent
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LoungeError, Result};

/// The lounge config directory (~/.lounge)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lounge"))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoungeConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub cards: CardConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Theme name; unknown names fall back to the default theme
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Drawer width while it holds focus
    #[serde(default = "default_drawer_width")]
    pub drawer_width: u16,

    /// Icon-rail width while focus is in the content area
    #[serde(default = "default_collapsed_width")]
    pub collapsed_width: u16,

    /// Padding around the content container
    #[serde(default = "default_padding")]
    pub padding: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            drawer_width: default_drawer_width(),
            collapsed_width: default_collapsed_width(),
            padding: default_padding(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardConfig {
    #[serde(default = "default_card_width")]
    pub width: u16,

    #[serde(default = "default_card_height")]
    pub height: u16,

    /// Horizontal gap between cards in a row
    #[serde(default = "default_card_gap")]
    pub gap: u16,

    /// Vertical gap between the two rows
    #[serde(default = "default_row_gap")]
    pub row_gap: u16,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: default_card_width(),
            height: default_card_height(),
            gap: default_card_gap(),
            row_gap: default_row_gap(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Append tracing output here; without it, logging is disabled
    /// (the alternate screen owns stdout)
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_log_filter(),
        }
    }
}

// Default value functions for serde
fn default_tick_rate_ms() -> u64 {
    100
}

fn default_theme() -> String {
    "midnight".to_string()
}

fn default_drawer_width() -> u16 {
    24
}

fn default_collapsed_width() -> u16 {
    6
}

fn default_padding() -> u16 {
    2
}

fn default_card_width() -> u16 {
    20
}

fn default_card_height() -> u16 {
    8
}

fn default_card_gap() -> u16 {
    2
}

fn default_row_gap() -> u16 {
    1
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl LoungeConfig {
    /// Load config from TOML files. Never fails.
    ///
    /// Priority order (highest to lowest):
    /// 1. ./lounge.toml (directory-specific)
    /// 2. ~/.lounge/config.toml (user defaults)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        let mut config = LoungeConfig::default();

        if let Some(global_path) = config_dir().map(|d| d.join("config.toml")) {
            if global_path.exists() {
                match Self::from_path(&global_path) {
                    Ok(global) => {
                        debug!("Loaded global config from {}", global_path.display());
                        config = global;
                    }
                    Err(e) => {
                        warn!("Ignoring {}: {}", global_path.display(), e);
                    }
                }
            }
        }

        // A local file replaces the global one wholesale; sections it
        // omits fall back to built-in defaults, not to global values.
        let local_path = PathBuf::from("lounge.toml");
        if local_path.exists() {
            match Self::from_path(&local_path) {
                Ok(local) => {
                    debug!("Loaded local config from {}", local_path.display());
                    config = local;
                }
                Err(e) => {
                    warn!("Ignoring {}: {}", local_path.display(), e);
                }
            }
        }

        config
    }

    /// Strict load of one named file. Missing or invalid files are
    /// errors here, not fallbacks.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoungeError::path_not_found(path));
        }
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| LoungeError::toml(path, e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoungeConfig::default();
        assert_eq!(config.general.tick_rate_ms, 100);
        assert_eq!(config.ui.theme, "midnight");
        assert_eq!(config.ui.drawer_width, 24);
        assert_eq!(config.ui.collapsed_width, 6);
        assert_eq!(config.cards.width, 20);
        assert_eq!(config.cards.height, 8);
        assert_eq!(config.cards.gap, 2);
        assert_eq!(config.cards.row_gap, 1);
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_config_dir_returns_path() {
        let dir = config_dir();
        assert!(dir.is_some());

        if let Some(path) = dir {
            assert!(path.ends_with(".lounge"));
        }
    }

    #[test]
    fn test_load_doesnt_panic() {
        // Should never panic, even if no config files exist.
        let config = LoungeConfig::load();
        assert!(config.general.tick_rate_ms > 0);
    }

    #[test]
    fn test_from_path_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\ntick_rate_ms = 50").unwrap();
        file.flush().unwrap();

        let config = LoungeConfig::from_path(file.path()).unwrap();
        assert_eq!(config.general.tick_rate_ms, 50);
        assert_eq!(config.ui.theme, "midnight");
        assert_eq!(config.cards.width, 20);
    }

    #[test]
    fn test_from_path_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = LoungeConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, LoungeError::PathNotFound { .. }));
    }

    #[test]
    fn test_from_path_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\ntheme = ").unwrap();
        file.flush().unwrap();

        let err = LoungeConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, LoungeError::Toml { .. }));
    }
}
