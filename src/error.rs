//! Error types for depsure operations.
//!
//! This module defines [`DepsureError`], the application-level error type,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DepsureError` for failures that stop a command before any package
//!   is attempted (bad config, unreadable files)
//! - Per-package failures are [`InstallFailure`](crate::installer::InstallFailure)
//!   values and never surface here
//! - Use `anyhow::Error` (via `DepsureError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depsure operations.
#[derive(Debug, Error)]
pub enum DepsureError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid package table or settings.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A package named on the command line is not in the table.
    #[error("Unknown package: {name}")]
    UnknownPackage { name: String },

    /// Could not set up the log destination.
    #[error("Failed to open log file {path}: {message}")]
    LogSetup { path: PathBuf, message: String },

    /// A program could not be started.
    #[error("Failed to start {command}: {message}")]
    CommandStart { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for depsure operations.
pub type Result<T> = std::result::Result<T, DepsureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = DepsureError::ConfigNotFound {
            path: PathBuf::from("/foo/depsure.yml"),
        };
        assert!(err.to_string().contains("/foo/depsure.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DepsureError::ConfigParseError {
            path: PathBuf::from("/depsure.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/depsure.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = DepsureError::ConfigValidationError {
            message: "package name is empty".into(),
        };
        assert!(err.to_string().contains("package name is empty"));
    }

    #[test]
    fn unknown_package_displays_name() {
        let err = DepsureError::UnknownPackage {
            name: "numpyy".into(),
        };
        assert!(err.to_string().contains("numpyy"));
    }

    #[test]
    fn command_start_displays_command_and_cause() {
        let err = DepsureError::CommandStart {
            command: "python3 -m pip install numpy".into(),
            message: "No such file or directory (os error 2)".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip install numpy"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DepsureError = io_err.into();
        assert!(matches!(err, DepsureError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: DepsureError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
