//! Configuration settings for taskquery.
//!
//! Settings are loaded from `~/.taskquery/config.yaml`. Every field is
//! optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::QueryError;
use crate::grammar::Locale;
use crate::parser::DEFAULT_MAX_CANDIDATES;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale used when `--locale` is not given.
    pub locale: Locale,
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Cap on candidate parses enumerated by `parse --candidates`.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to `colored`'s global switch.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            output: default_output_format(),
            color: default_color(),
            max_candidates: default_max_candidates(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// including when it names an unsupported locale.
    pub fn load_from_path(path: &Path) -> Result<Self, QueryError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            QueryError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            QueryError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), QueryError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            QueryError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, QueryError> {
        serde_yaml::to_string(self)
            .map_err(|e| QueryError::Config(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.output, OutputFormat::Pretty);
        assert_eq!(config.color, ColorSetting::Auto);
        assert_eq!(config.max_candidates, 32);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config {
            locale: Locale::De,
            output: OutputFormat::Json,
            color: ColorSetting::Never,
            max_candidates: 8,
        };

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        std::fs::write(&config_path, "locale: ja\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.locale, Locale::Ja);
        // Defaults should be used for missing fields
        assert_eq!(config.output, OutputFormat::Pretty);
        assert_eq!(config.max_candidates, 32);
    }

    #[test]
    fn test_unsupported_locale_in_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "locale: tlh\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, QueryError::Config(_)));
    }

    #[test]
    fn test_yaml_uses_lowercase_names() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("locale: en"));
        assert!(yaml.contains("output: pretty"));
        assert!(yaml.contains("color: auto"));
    }
}
