//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - Source discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use depsure::config::{load_config, ConfigSource};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("depsure.yml"), "packages: [numpy]").unwrap();
//!
//! let source = ConfigSource::discover(None, temp.path());
//! let config = load_config(&source).unwrap();
//! assert_eq!(config.packages, vec!["numpy".to_string()]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    builtin_config, load_config, load_config_file, parse_config, ConfigSource, CONFIG_FILE_NAME,
};
pub use schema::{DepsureConfig, Settings};
pub use validator::{duplicate_packages, validate, validate_config, ValidationError};
