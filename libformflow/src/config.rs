//! Configuration management for FormFlow
//!
//! Settings live in an optional TOML file. A missing file means defaults;
//! a file that exists but cannot be read or parsed is an error. A few
//! environment variables override the file (see [`Config::apply_env`]).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// How long a toast stays on screen
    pub toast_ms: u64,
    pub colors: bool,
    /// Unicode symbols in the list; ASCII when off
    pub unicode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    pub level: String,
    /// Log file; stderr when unset (the TUI picks a file in the data dir)
    pub file: Option<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            toast_ms: 2000,
            colors: true,
            unicode: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply env overrides
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let mut config = Self::load_or_default(&config_path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Like [`Config::load_from_path`], but a missing file yields defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Apply environment overrides
    ///
    /// - `NO_COLOR` / `FORMFLOW_NO_COLOR`: disable colours
    /// - `FORMFLOW_TICK_MS`: tick rate
    /// - `FORMFLOW_LOG_FORMAT`, `FORMFLOW_LOG_LEVEL`: logging
    pub fn apply_env(&mut self) {
        if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("FORMFLOW_NO_COLOR").is_some() {
            self.ui.colors = false;
        }

        if let Some(tick) = std::env::var("FORMFLOW_TICK_MS").ok().and_then(|s| s.parse().ok()) {
            self.ui.tick_rate_ms = tick;
        }

        if let Some(format) = std::env::var("FORMFLOW_LOG_FORMAT").ok().and_then(|s| s.parse().ok()) {
            self.logging.format = format;
        }

        if let Ok(level) = std::env::var("FORMFLOW_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Log file path with `~` expanded
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("FORMFLOW_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("formflow").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("formflow"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormFlowError;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.toast_ms, 2000);
        assert!(config.ui.colors);
        assert!(config.ui.unicode);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntick_rate_ms = 50\nunicode = false\n\n[logging]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.toast_ms, 2000);
        assert!(!config.ui.unicode);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui\ntick_rate_ms = ").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert!(matches!(err, FormFlowError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("FORMFLOW_NO_COLOR", "1");
        std::env::set_var("FORMFLOW_TICK_MS", "250");
        std::env::set_var("FORMFLOW_LOG_LEVEL", "debug");
        std::env::set_var("FORMFLOW_LOG_FORMAT", "json");
        let mut config = Config::default();
        config.apply_env();
        std::env::remove_var("FORMFLOW_NO_COLOR");
        std::env::remove_var("FORMFLOW_TICK_MS");
        std::env::remove_var("FORMFLOW_LOG_LEVEL");
        std::env::remove_var("FORMFLOW_LOG_FORMAT");

        assert!(!config.ui.colors);
        assert!(config.ui.unicode);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn test_unknown_log_format_env_ignored() {
        std::env::set_var("FORMFLOW_LOG_FORMAT", "xml");
        let mut config = Config::default();
        config.apply_env();
        std::env::remove_var("FORMFLOW_LOG_FORMAT");

        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    #[serial]
    fn test_invalid_tick_env_ignored() {
        std::env::set_var("FORMFLOW_TICK_MS", "fast");
        let mut config = Config::default();
        config.apply_env();
        std::env::remove_var("FORMFLOW_TICK_MS");

        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var("FORMFLOW_CONFIG", "/tmp/formflow-test.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("FORMFLOW_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/formflow-test.toml"));
    }
}
