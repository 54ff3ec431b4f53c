//! Error types for shiplane operations.
//!
//! This module defines [`ShiplaneError`], the error type used by the lane
//! commands, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Define resolution never fails; it degrades to fewer bindings
//! - Use `ShiplaneError` for config and build failures that stop the lane
//! - Use `anyhow::Error` (via `ShiplaneError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shiplane operations.
#[derive(Debug, Error)]
pub enum ShiplaneError {
    /// Failed to parse the lane configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Build command could not be spawned or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for shiplane operations.
pub type Result<T> = std::result::Result<T, ShiplaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ShiplaneError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = ShiplaneError::ConfigValidationError {
            message: "flutter executable is empty".into(),
        };
        assert!(err.to_string().contains("flutter executable is empty"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = ShiplaneError::CommandFailed {
            command: "flutter build ipa".into(),
            code: Some(65),
        };
        let msg = err.to_string();
        assert!(msg.contains("flutter build ipa"));
        assert!(msg.contains("65"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShiplaneError = io_err.into();
        assert!(matches!(err, ShiplaneError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ShiplaneError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
