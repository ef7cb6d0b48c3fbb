//! Configuration management for Boiler Panel
//!
//! This module handles loading, validation, and management of the application
//! configuration from YAML files. Command line flags may override individual
//! values after loading.

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

mod defaults;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection configuration
    pub backend: BackendConfig,

    /// Polling cadence
    pub polling: PollingConfig,

    /// Presentation settings for the console panel
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend HTTP endpoint parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the boiler backend, e.g. `http://192.168.1.20:5000`
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

/// Polling cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Base status poll interval in seconds; runs for the whole session
    pub base_interval_secs: u64,

    /// Estimate refresh interval in seconds; only runs while the boiler is
    /// heating toward a reported ready time
    pub estimate_interval_secs: u64,
}

/// Console panel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// File holding the persisted language preference
    pub preferences_file: String,

    /// Language used when no valid preference is stored
    pub default_language: String,

    /// Delay before a toast becomes visible, in milliseconds
    pub toast_delay_ms: u64,

    /// How long a toast stays visible, in milliseconds
    pub toast_duration_ms: u64,

    /// Panel width in columns; right-to-left output is aligned to it
    pub width: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Path to log file (or directory)
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to the console (stderr)
    pub console_output: bool,

    /// Whether to write log files at all
    pub file_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl PollingConfig {
    pub fn base_interval(&self) -> Duration {
        Duration::from_secs(self.base_interval_secs)
    }

    pub fn estimate_interval(&self) -> Duration {
        Duration::from_secs(self.estimate_interval_secs)
    }
}

impl UiConfig {
    pub fn toast_delay(&self) -> Duration {
        Duration::from_millis(self.toast_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the first default location that exists
    pub fn load() -> Result<Self> {
        let default_paths = ["boiler_panel.yaml", "/etc/boiler-panel/config.yaml"];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        // Fall back to default configuration
        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.backend.base_url.trim();
        if base_url.is_empty() {
            return Err(PanelError::validation(
                "backend.base_url",
                "Base URL cannot be empty",
            ));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(PanelError::validation(
                "backend.base_url",
                "Base URL must start with http:// or https://",
            ));
        }

        if self.backend.request_timeout_ms == 0 {
            return Err(PanelError::validation(
                "backend.request_timeout_ms",
                "Must be greater than 0",
            ));
        }

        if self.polling.base_interval_secs == 0 {
            return Err(PanelError::validation(
                "polling.base_interval_secs",
                "Must be greater than 0",
            ));
        }

        if self.polling.estimate_interval_secs == 0 {
            return Err(PanelError::validation(
                "polling.estimate_interval_secs",
                "Must be greater than 0",
            ));
        }

        if self.ui.default_language.trim().is_empty() {
            return Err(PanelError::validation(
                "ui.default_language",
                "Cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.polling.base_interval_secs, 60);
        assert_eq!(config.polling.estimate_interval_secs, 240);
        assert_eq!(config.ui.default_language, "en");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.backend.base_url = String::new();
        assert!(config.validate().is_err());

        config = Config::default();
        config.backend.base_url = "ftp://boiler".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.polling.estimate_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(
            config.polling.base_interval_secs,
            deserialized.polling.base_interval_secs
        );
        assert_eq!(config.backend.base_url, deserialized.backend.base_url);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "backend:\n  base_url: http://boiler.local:5000\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.base_url, "http://boiler.local:5000");
        assert_eq!(config.backend.request_timeout_ms, 10_000);
        assert_eq!(config.polling.base_interval_secs, 60);
    }
}
