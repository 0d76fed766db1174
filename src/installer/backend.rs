//! Package backends.
//!
//! The installer never talks to pip directly. It goes through
//! [`PackageBackend`], so tests can swap in [`MockBackend`](super::MockBackend)
//! and run against synthetic package lists without touching the real
//! environment.

use std::collections::HashMap;

use super::failure::InstallFailure;
use crate::config::Settings;
use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// Where an install lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallScope {
    /// The interpreter's own site-packages.
    Environment,
    /// The per-user site directory (the elevated retry).
    User,
}

/// Presence query and install operations for one environment.
pub trait PackageBackend {
    /// Look up an installed distribution by name. Read-only.
    ///
    /// `Err` means the lookup itself could not run, and is always
    /// [`InstallFailure::EnvironmentQuery`].
    fn is_installed(&self, name: &str) -> std::result::Result<bool, InstallFailure>;

    /// Install `target`. A non-zero exit is `Ok` with `success == false`;
    /// `Err` means the installer could not be started.
    fn install(&self, target: &str, scope: InstallScope) -> Result<CommandResult>;
}

/// Backend that drives `<python> -m pip`.
#[derive(Debug, Clone)]
pub struct PipBackend {
    python: String,
    user_flag: String,
    pip_args: Vec<String>,
    options: CommandOptions,
}

impl PipBackend {
    /// Create a backend for the given interpreter with default flags.
    pub fn new(python: impl Into<String>) -> Self {
        Self::from_settings(&Settings {
            python: python.into(),
            ..Settings::default()
        })
    }

    /// Create a backend from configured settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut env = HashMap::new();
        // Keeps pip's self-update notice out of captured stderr.
        env.insert(
            "PIP_DISABLE_PIP_VERSION_CHECK".to_string(),
            "1".to_string(),
        );

        Self {
            python: settings.python.clone(),
            user_flag: settings.user_flag.clone(),
            pip_args: settings.pip_args.clone(),
            options: CommandOptions { env },
        }
    }

    /// Interpreter this backend runs.
    pub fn python(&self) -> &str {
        &self.python
    }

    fn pip(&self, subcommand: &[&str]) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "pip".to_string()];
        args.extend(subcommand.iter().map(|s| s.to_string()));
        args
    }

    /// Argument list for an install of `target`.
    pub fn install_args(&self, target: &str, scope: InstallScope) -> Vec<String> {
        let mut args = self.pip(&["install"]);
        if scope == InstallScope::User {
            args.push(self.user_flag.clone());
        }
        args.extend(self.pip_args.iter().cloned());
        args.push(target.to_string());
        args
    }
}

impl PackageBackend for PipBackend {
    fn is_installed(&self, name: &str) -> std::result::Result<bool, InstallFailure> {
        let args = self.pip(&["show", "--quiet", name]);
        match execute(&self.python, &args, &self.options) {
            Ok(result) => Ok(result.success),
            Err(e) => Err(InstallFailure::EnvironmentQuery {
                package: name.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn install(&self, target: &str, scope: InstallScope) -> Result<CommandResult> {
        let args = self.install_args(target, scope);
        execute(&self.python, &args, &self.options)
    }
}
