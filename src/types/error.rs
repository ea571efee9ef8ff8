//! Error types for the settings container

use thiserror::Error;

/// Main error type for settings access and loading
#[derive(Debug, Error)]
pub enum SettingsError {
    // === Access errors ===
    /// A typed read asked for a different type than the one stored
    #[error("Setting '{key}' holds a {found}, not a {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    // === Configuration errors ===
    /// An extension search pattern is not a valid glob
    #[error("Invalid extension search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // === External errors ===
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

impl SettingsError {
    /// Check if this error is a typed read against a value of another type
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, SettingsError::TypeMismatch { .. })
    }

    /// Check if this error came from bad configuration input
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SettingsError::InvalidPattern { .. }
                | SettingsError::ConfigError(_)
                | SettingsError::Json(_)
        )
    }

    /// Short stable name of the error kind, used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            SettingsError::TypeMismatch { .. } => "type_mismatch",
            SettingsError::InvalidPattern { .. } => "invalid_pattern",
            SettingsError::ConfigError(_) => "config",
            SettingsError::Io(_) => "io",
            SettingsError::Json(_) => "json",
        }
    }

    // === Constructor helpers ===

    /// Create a type mismatch error for `key`
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        SettingsError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: globset::Error) -> Self {
        SettingsError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        SettingsError::ConfigError(msg.into())
    }
}
