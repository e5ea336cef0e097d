//! # Configuration
//!
//! Settings loaded from `<config dir>/buddy/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chat::DEFAULT_REPLY_DELAY;
use crate::error::{BuddyError, Result};
use crate::window::WindowSize;

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Classic light chrome.
    #[default]
    Light,
    /// Dark chrome.
    Dark,
}

impl Theme {
    /// CSS class applied to the root element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay before the simulated contact answers, in milliseconds.
    pub reply_delay_ms: u64,

    /// Fixed content size of the main window.
    pub window: WindowSize,

    /// Color theme.
    pub theme: Theme,

    /// Maximum log level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY.as_millis() as u64,
            window: WindowSize::default(),
            theme: Theme::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Returns the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("buddy").join("config.json"))
    }

    /// Loads configuration from disk, or returns defaults if not found.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parses and validates a JSON config document.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// * [`BuddyError::Serialization`] - Malformed JSON
    /// * [`BuddyError::Config`] - Values out of range
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(BuddyError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.log_level().is_none() {
            return Err(BuddyError::Config(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Reply delay as a [`Duration`].
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Parsed log level.
    pub fn log_level(&self) -> Option<tracing::Level> {
        self.log_level.parse().ok()
    }
}
