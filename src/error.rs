//! Error types for envpicker operations.
//!
//! This module defines [`PickerError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolution failures are returned to the caller, never turned into a
//!   process exit; only the binary decides exit codes
//! - Malformed URLs and a missing request context are not errors, they
//!   resolve to the default environment
//! - Use `anyhow::Error` (via `PickerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envpicker operations.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Strict mode rejected a resolved name that is neither the default
    /// nor a registered environment.
    #[error(
        "Unknown environment '{candidate}'. Environment must be one of the following: {}",
        valid.join(", ")
    )]
    UnknownEnvironment {
        candidate: String,
        valid: Vec<String>,
    },

    /// A registered pattern failed to compile when it was evaluated.
    #[error("Invalid pattern for environment '{name}' ({pattern}): {message}")]
    InvalidPattern {
        name: String,
        pattern: String,
        message: String,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envpicker operations.
pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_environment_lists_valid_names() {
        let err = PickerError::UnknownEnvironment {
            candidate: "ghost".into(),
            valid: vec!["production".into(), "local".into(), "staging".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'ghost'"));
        assert!(msg.ends_with("production, local, staging"));
    }

    #[test]
    fn invalid_pattern_displays_name_pattern_and_message() {
        let err = PickerError::InvalidPattern {
            name: "local".into(),
            pattern: "(".into(),
            message: "unclosed group".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("local"));
        assert!(msg.contains("("));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = PickerError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PickerError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PickerError = io_err.into();
        assert!(matches!(err, PickerError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PickerError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
