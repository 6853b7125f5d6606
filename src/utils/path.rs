//! Path utilities for configuration files
//!
//! Handles XDG directory specifications and path resolution.

use crate::error::{Result, TranscodeError};
use std::env;
use std::path::PathBuf;

/// Get the transcoder configuration directory
///
/// Priority:
/// 1. TRANSCODER_CONFIG_HOME environment variable
/// 2. XDG_CONFIG_HOME/transcoder-rs
/// 3. ~/.config/transcoder-rs (fallback)
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("TRANSCODER_CONFIG_HOME") {
        return Ok(expand_tilde(&path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("transcoder-rs"));
    }

    Err(TranscodeError::config("Unable to determine config directory"))
}

/// Get the path to the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name() {
        if let Ok(file) = config_file() {
            assert!(file.ends_with("config.yaml"));
        }
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test");
        if dirs::home_dir().is_some() {
            assert!(!path.to_string_lossy().starts_with('~'));
        }
        assert_eq!(expand_tilde("/etc/x"), PathBuf::from("/etc/x"));
    }
}
