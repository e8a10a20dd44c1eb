//! LatexClip Config
//!
//! This crate handles configuration loading and management
//! for latexclip, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/latexclip/config.toml`
//! - macOS: `~/Library/Application Support/latexclip/config.toml`
//! - Windows: `%APPDATA%\latexclip\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use latexclip_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod output;

pub use output::{OutputConfig, OutputOverride};

use latexclip_core::{LatexclipError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[output]
Mode   = "plain"
Batch  = false
Labels = false
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// A partial configuration parsed from an override file or inline TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub output: OutputOverride,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use latexclip_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "latexclip")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| LatexclipError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// Only the keys present in the override replace loaded values.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use latexclip_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[output]\nMode = \"tex\"")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<ConfigOverride> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| LatexclipError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Keys present in `other` take precedence; the rest are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use latexclip_config::Config;
    /// use latexclip_core::OutputMode;
    ///
    /// let mut base = Config::default();
    /// base.output.batch = true;
    /// let override_config = Config::parse_override("[output]\nMode = \"mathtext\"").unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.output.mode, OutputMode::Mathtext);
    /// assert!(base.output.batch);
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.output.merge(&other.output);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| LatexclipError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latexclip_core::OutputMode;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.mode, OutputMode::Plain);
        assert!(!config.output.batch);
        assert!(!config.output.labels);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let override_toml = r#"
            [output]
            Mode = "all"
            Batch = true
        "#;
        let override_config: ConfigOverride = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert_eq!(base.output.mode, OutputMode::All);
        assert!(base.output.batch);
    }

    #[test]
    fn test_partial_override_keeps_loaded_values() {
        let mut base: Config = toml::from_str("[output]\nMode = \"tex\"\nBatch = true").unwrap();
        base.merge(&Config::parse_override("[output]\nLabels = true").unwrap());

        assert_eq!(base.output.mode, OutputMode::Tex);
        assert!(base.output.batch);
        assert!(base.output.labels);
    }

    #[test]
    fn test_override_from_file() {
        let path = std::env::temp_dir().join(format!("latexclip-override-{}.toml", std::process::id()));
        std::fs::write(&path, "[output]\nBatch = true\n").unwrap();

        let mut config = Config::default();
        config.merge(&Config::parse_override(&path.to_string_lossy()).unwrap());
        assert!(config.output.batch);
        assert_eq!(config.output.mode, OutputMode::Plain);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_parse_override_inline() {
        let config = Config::parse_override("[output]\nLabels = true").unwrap();
        assert_eq!(config.output.labels, Some(true));
        assert_eq!(config.output.mode, None);
    }

    #[test]
    fn test_parse_override_invalid() {
        let err = Config::parse_override("[output]\nMode = \"png\"").unwrap_err();
        assert!(matches!(err, LatexclipError::Config(_)));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.mode, OutputMode::Plain);
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("latexclip"));
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!("latexclip-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.output.mode = OutputMode::Tex;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output.mode, OutputMode::Tex);
        std::fs::remove_file(&path).unwrap();
    }
}
