//! Configuration validation.

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::DepsureConfig;
use crate::error::{DepsureError, Result};

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("package entry {index} has an empty name")]
    EmptyPackageName { index: usize },

    #[error("alias for '{name}' is empty")]
    EmptyAlias { name: String },

    #[error("advisory for '{name}' is empty")]
    EmptyAdvisory { name: String },

    #[error("settings.python is empty")]
    EmptyPython,
}

/// Collect every problem in a config.
pub fn validate_config(config: &DepsureConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.settings.python.trim().is_empty() {
        errors.push(ValidationError::EmptyPython);
    }

    for (index, name) in config.packages.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyPackageName { index });
        }
    }

    for (name, alias) in &config.aliases {
        if alias.trim().is_empty() {
            errors.push(ValidationError::EmptyAlias { name: name.clone() });
        }
    }

    for (name, text) in &config.advisories {
        if text.trim().is_empty() {
            errors.push(ValidationError::EmptyAdvisory { name: name.clone() });
        }
    }

    errors
}

/// Validate, returning the first problem as an error.
pub fn validate(config: &DepsureConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(DepsureError::ConfigValidationError { message })
}

/// Names listed more than once, in first-repeat order.
///
/// Duplicates are legal; each entry is attempted.
pub fn duplicate_packages(config: &DepsureConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for name in &config.packages {
        if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
            duplicates.push(name.clone());
        }
    }

    duplicates
}
