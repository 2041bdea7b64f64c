//! Configuration module for seqls
//!
//! Manages persistent display preferences. Configuration is stored in the
//! user's config directory and merged under any flags given on the command
//! line.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::options::DisplayOptions;

const fn default_true() -> bool {
    true
}

/// Persistent preferences loaded from `config.toml`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SeqlsConfig {
    /// Colorize listings
    #[serde(default = "default_true")]
    pub color: bool,

    /// Always show the properties columns
    #[serde(default)]
    pub properties: bool,

    /// Prefix names with their directory
    #[serde(default)]
    pub relative_path: bool,

    /// Resolve names to absolute paths
    #[serde(default)]
    pub absolute_path: bool,

    /// Include dot files in listings
    #[serde(default)]
    pub show_dot_files: bool,
}

impl Default for SeqlsConfig {
    fn default() -> Self {
        Self {
            color: true,
            properties: false,
            relative_path: false,
            absolute_path: false,
            show_dot_files: false,
        }
    }
}

impl SeqlsConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("seqls").join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults when the file
    /// does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
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
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The display options these preferences describe.
    #[must_use]
    pub const fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            absolute_path: self.absolute_path,
            relative_path: self.relative_path,
            properties: self.properties,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_only_enable_color() {
        let config = SeqlsConfig::default();
        assert!(config.color);
        assert!(!config.properties);
        assert!(!config.show_dot_files);

        let display = config.display_options();
        assert!(display.color);
        assert!(!display.properties);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = SeqlsConfig {
            color: false,
            properties: true,
            ..SeqlsConfig::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: SeqlsConfig = toml::from_str(&text).unwrap();
        assert!(!back.color);
        assert!(back.properties);
    }
}
