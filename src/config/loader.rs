//! Configuration file discovery and loading.
//!
//! Sources, first match wins:
//! 1. An explicit `--config <path>`
//! 2. `depsure.yml` in the working directory
//! 3. The built-in package table compiled into the binary

use crate::config::schema::DepsureConfig;
use crate::config::validator::{duplicate_packages, validate};
use crate::error::{DepsureError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "depsure.yml";

const BUILT_IN_TABLE: &str = include_str!("default_packages.yml");

/// Where a configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl ConfigSource {
    /// Pick a source. An explicit path is used even if it does not exist,
    /// so a typo surfaces as `ConfigNotFound` instead of silently falling
    /// back to the built-in table.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }

        let local = working_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            Self::File(local)
        } else {
            Self::BuiltIn
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::BuiltIn => "built-in package table".to_string(),
        }
    }
}

/// Load, validate and return the config for a source.
pub fn load_config(source: &ConfigSource) -> Result<DepsureConfig> {
    let config = match source {
        ConfigSource::File(path) => load_config_file(path)?,
        ConfigSource::BuiltIn => builtin_config()?,
    };

    validate(&config)?;

    for name in duplicate_packages(&config) {
        tracing::warn!("{} is listed more than once; each entry will be attempted", name);
    }

    tracing::debug!(
        "Loaded {} packages from {}",
        config.packages.len(),
        source.describe()
    );
    Ok(config)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DepsureConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DepsureError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DepsureError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DepsureConfig> {
    serde_yaml::from_str(content).map_err(|e| DepsureError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The package table shipped with the binary.
pub fn builtin_config() -> Result<DepsureConfig> {
    parse_config(BUILT_IN_TABLE, Path::new("<built-in>"))
}
