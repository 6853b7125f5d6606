//! Error types for transcoder-rs
//!
//! This module defines custom error types using thiserror for better error handling.

use thiserror::Error;

/// Main error type for transcoder-rs
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// The codec does not know the (resolved) charset
    #[error("Unsupported charset \"{charset}\"{}: {message}", alias_suffix(.alias))]
    UnsupportedEncoding {
        /// Charset name as declared by the caller
        charset: String,
        /// Resolved name, present only when an alias applied
        alias: Option<String>,
        /// Codec diagnostic
        message: String,
    },

    /// The codec knows the charset but the bytes are not valid in it
    #[error("Malformed input for charset \"{charset}\"{}: {message}", alias_suffix(.alias))]
    MalformedInput {
        charset: String,
        alias: Option<String>,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for transcoder-rs
pub type Result<T> = std::result::Result<T, TranscodeError>;

fn alias_suffix(alias: &Option<String>) -> String {
    match alias {
        Some(alias) => format!(" (alias found: \"{}\")", alias),
        None => String::new(),
    }
}

/// Resolved name worth reporting: only when it differs from what was declared.
fn found_alias(declared: &str, resolved: &str) -> Option<String> {
    (declared != resolved).then(|| resolved.to_string())
}

impl TranscodeError {
    /// Create an unsupported-encoding error
    pub fn unsupported<S: Into<String>>(declared: &str, resolved: &str, msg: S) -> Self {
        TranscodeError::UnsupportedEncoding {
            charset: declared.to_string(),
            alias: found_alias(declared, resolved),
            message: msg.into(),
        }
    }

    /// Create a malformed-input error
    pub fn malformed<S: Into<String>>(declared: &str, resolved: &str, msg: S) -> Self {
        TranscodeError::MalformedInput {
            charset: declared.to_string(),
            alias: found_alias(declared, resolved),
            message: msg.into(),
        }
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TranscodeError::ConfigError(msg.into())
    }

    /// True for every failure of the decode step itself.
    ///
    /// Callers that want to treat "charset unknown" and "bytes invalid" the same
    /// way (fall back to another charset, say) can match on this instead of on
    /// the two variants.
    pub fn is_unsupported_encoding(&self) -> bool {
        matches!(
            self,
            TranscodeError::UnsupportedEncoding { .. } | TranscodeError::MalformedInput { .. }
        )
    }

    /// Declared charset name for decode failures
    pub fn charset(&self) -> Option<&str> {
        match self {
            TranscodeError::UnsupportedEncoding { charset, .. }
            | TranscodeError::MalformedInput { charset, .. } => Some(charset),
            _ => None,
        }
    }

    /// Name the codec was actually asked for, for decode failures.
    ///
    /// Equals [`charset`](Self::charset) when no alias applied.
    pub fn resolved_charset(&self) -> Option<&str> {
        match self {
            TranscodeError::UnsupportedEncoding { charset, alias, .. }
            | TranscodeError::MalformedInput { charset, alias, .. } => {
                Some(alias.as_deref().unwrap_or(charset))
            }
            _ => None,
        }
    }
}

/// Convert from serde_yaml::Error
impl From<serde_yaml::Error> for TranscodeError {
    fn from(err: serde_yaml::Error) -> Self {
        TranscodeError::YamlError(err.to_string())
    }
}
