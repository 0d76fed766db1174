//! Status command implementation.
//!
//! The `depsure status` command queries the environment for each package
//! and reports what is present. Nothing is installed.

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::config::{load_config, ConfigSource, DepsureConfig};
use crate::error::Result;
use crate::installer::{PackageBackend, PipBackend};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::selection::select;

/// Presence of one package.
#[derive(Debug, Clone, Serialize)]
pub struct PackageStatus {
    pub package: String,
    /// `None` when the query itself failed.
    pub installed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The status command implementation.
pub struct StatusCommand {
    source: ConfigSource,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(source: ConfigSource, args: StatusArgs) -> Self {
        Self { source, args }
    }

    /// Query against a specific backend.
    pub fn execute_with(
        &self,
        backend: &dyn PackageBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = load_config(&self.source)?;
        self.report(&config, backend, ui)
    }

    fn report(
        &self,
        config: &DepsureConfig,
        backend: &dyn PackageBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let table = select(config.package_table(), &self.args.only, &[])?;

        let statuses: Vec<PackageStatus> = table
            .requests
            .iter()
            .map(|request| match backend.is_installed(&request.name) {
                Ok(installed) => PackageStatus {
                    package: request.name.clone(),
                    installed: Some(installed),
                    error: None,
                },
                Err(failure) => PackageStatus {
                    package: request.name.clone(),
                    installed: None,
                    error: Some(failure.to_string()),
                },
            })
            .collect();

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&statuses)?);
        } else {
            let width = statuses.iter().map(|s| s.package.len()).max().unwrap_or(0);
            for status in &statuses {
                let state = match status.installed {
                    Some(true) => "installed",
                    Some(false) => "missing",
                    None => "unknown",
                };
                ui.message(&format!("{:<width$}  {}", status.package, state));
                if let Some(advisory) = table.advisory(&status.package) {
                    if status.installed != Some(true) {
                        ui.message(&format!("{:<width$}  note: {}", "", advisory));
                    }
                }
            }
        }

        let all_present = statuses.iter().all(|s| s.installed == Some(true));
        if all_present {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.source)?;

        let mut settings = config.settings.clone();
        if let Some(python) = &self.args.python {
            settings.python = python.clone();
        }

        let backend = PipBackend::from_settings(&settings);
        self.report(&config, &backend, ui)
    }
}
