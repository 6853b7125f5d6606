//! Configuration module for transcoder-rs
//!
//! Handles loading configuration from YAML files and environment variables.

use crate::error::{Result, TranscodeError};
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Transcoder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscoderConfig {
    /// Extra aliases (alias -> canonical), consulted before the built-in table
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    #[serde(default)]
    pub codec: CodecConfig,
}

/// Codec configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Replace malformed sequences with U+FFFD instead of failing
    #[serde(default)]
    pub lossy: bool,
}

impl TranscoderConfig {
    /// Load configuration from the config directory and environment variables.
    ///
    /// A missing config file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        let config_file = path::config_file()?;

        let mut config = if config_file.exists() {
            Self::from_file(&config_file)?
        } else {
            log::debug!("No config file at {:?}, using defaults", config_file);
            Self::default()
        };

        config.apply_env();

        Ok(config)
    }

    /// Read configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        log::debug!("Loaded config file {:?}", path);
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(content)
            .map_err(|e| TranscodeError::YamlError(format!("Failed to parse config: {}", e)))?;
        config.normalize()?;
        Ok(config)
    }

    /// Lowercase alias keys and reject empty entries
    fn normalize(&mut self) -> Result<()> {
        let mut aliases = HashMap::with_capacity(self.aliases.len());
        for (alias, canonical) in self.aliases.drain() {
            let alias = alias.trim().to_lowercase();
            let canonical = canonical.trim().to_string();
            if alias.is_empty() || canonical.is_empty() {
                return Err(TranscodeError::config(
                    "Alias entries must have a non-empty name and target",
                ));
            }
            aliases.insert(alias, canonical);
        }
        self.aliases = aliases;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(val) = env::var("TRANSCODER_LOSSY") {
            self.codec.lossy = parse_flag(&val);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        log::debug!("Saved config file {:?}", path);
        Ok(())
    }
}

fn parse_flag(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TranscoderConfig::default();
        assert!(config.aliases.is_empty());
        assert!(!config.codec.lossy);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "aliases:\n  X-Unknown-8bit: windows-1252\n  ' cp-1252 ': ' windows-1252 '\ncodec:\n  lossy: true\n";
        let config = TranscoderConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.aliases.get("x-unknown-8bit").map(String::as_str), Some("windows-1252"));
        assert_eq!(config.aliases.get("cp-1252").map(String::as_str), Some("windows-1252"));
        assert!(config.codec.lossy);
    }

    #[test]
    fn test_from_yaml_sections_optional() {
        let config = TranscoderConfig::from_yaml("{}").unwrap();
        assert_eq!(config, TranscoderConfig::default());
    }

    #[test]
    fn test_from_yaml_rejects_empty_target() {
        let err = TranscoderConfig::from_yaml("aliases:\n  foo: ''\n").unwrap_err();
        assert!(matches!(err, TranscodeError::ConfigError(_)));
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = TranscoderConfig::from_yaml("aliases: [1, 2").unwrap_err();
        assert!(matches!(err, TranscodeError::YamlError(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.yaml");

        let mut config = TranscoderConfig::default();
        config.aliases.insert("mystery".to_string(), "UTF-8".to_string());
        config.save(&file).unwrap();

        let loaded = TranscoderConfig::from_file(&file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = TranscoderConfig::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        match err {
            TranscodeError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_into_missing_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("no-such-dir").join("config.yaml");
        let err = TranscoderConfig::default().save(&file).unwrap_err();
        assert!(matches!(err, TranscodeError::IoError(_)));
    }

    // Environment variables are process-wide, so every case that touches
    // them lives in this one test.
    #[test]
    fn test_load_uses_env() {
        let dir = TempDir::new().unwrap();
        unsafe {
            env::set_var("TRANSCODER_CONFIG_HOME", dir.path());
            env::remove_var("TRANSCODER_LOSSY");
        }

        // No config.yaml yet: defaults, and nothing gets written
        let config = TranscoderConfig::load().unwrap();
        assert_eq!(config, TranscoderConfig::default());
        assert!(!dir.path().join("config.yaml").exists());

        unsafe { env::set_var("TRANSCODER_LOSSY", "true") };
        assert!(TranscoderConfig::load().unwrap().codec.lossy);

        // The override wins over the file in both directions
        fs::write(
            dir.path().join("config.yaml"),
            "aliases:\n  Mystery: UTF-8\ncodec:\n  lossy: true\n",
        )
        .unwrap();
        unsafe { env::set_var("TRANSCODER_LOSSY", "0") };
        let config = TranscoderConfig::load().unwrap();
        assert!(!config.codec.lossy);
        assert_eq!(config.aliases.get("mystery").map(String::as_str), Some("UTF-8"));

        unsafe { env::remove_var("TRANSCODER_LOSSY") };
        assert!(TranscoderConfig::load().unwrap().codec.lossy);

        unsafe { env::remove_var("TRANSCODER_CONFIG_HOME") };
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }
}
