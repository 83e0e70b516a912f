//! Configuration module for markr
//!
//! Manages application configuration: the default library file, the
//! debounce interval for interactive filtering, date display format and
//! handoff defaults. Configuration is stored in the user's config
//! directory and created with defaults on first use.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_debounce_ms() -> u64 {
    300
}

fn default_date_format() -> String {
    // Of the format "21 Aug'21,  5pm"
    "%d %b'%y, %l%P".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarkrConfig {
    /// Path to the item collection JSON; falls back to the data directory
    #[serde(default)]
    pub library: Option<PathBuf>,

    /// Idle interval in milliseconds before typed input re-runs the pipeline
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// chrono format string for displayed dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Database path handed to the external application on save
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for MarkrConfig {
    fn default() -> Self {
        Self {
            library: None,
            debounce_ms: default_debounce_ms(),
            date_format: default_date_format(),
            db_path: None,
            quiet: false,
        }
    }
}

impl MarkrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("markr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the library file to use: CLI flag, then config, then the
    /// platform data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no override is given, the config has no
    /// library entry, and the system data directory cannot be determined.
    pub fn resolve_library(&self, cli_override: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.library {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine data directory".to_string())
        })?;
        Ok(data_dir.join("markr").join("library.json"))
    }

    /// Debounce interval as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarkrConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.date_format, "%d %b'%y, %l%P");
        assert!(config.library.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MarkrConfig = toml::from_str("quiet = true").unwrap();
        assert!(config.quiet);
        assert_eq!(config.debounce_ms, 300);
        assert!(!config.date_format.is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = MarkrConfig::default();
        config.library = Some(PathBuf::from("/tmp/library.json"));
        config.debounce_ms = 150;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: MarkrConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.debounce_ms, 150);
        assert_eq!(parsed.library, Some(PathBuf::from("/tmp/library.json")));
    }

    #[test]
    fn test_resolve_library_priority() {
        let mut config = MarkrConfig::default();
        config.library = Some(PathBuf::from("/from/config.json"));

        let cli = PathBuf::from("/from/cli.json");
        assert_eq!(config.resolve_library(Some(&cli)).unwrap(), cli);
        assert_eq!(
            config.resolve_library(None).unwrap(),
            PathBuf::from("/from/config.json")
        );
    }

    #[test]
    fn test_debounce_duration() {
        let mut config = MarkrConfig::default();
        config.debounce_ms = 150;
        assert_eq!(config.debounce(), Duration::from_millis(150));
    }
}
