//! Run command implementation.
//!
//! The `depsure run` command checks every package in the table, installs the
//! missing ones and logs each outcome. Per-package failures never change the
//! exit code.

use crate::cli::args::RunArgs;
use crate::config::{load_config, ConfigSource, DepsureConfig};
use crate::error::Result;
use crate::installer::{Installer, PackageBackend, PipBackend};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::selection::select;

/// The run command implementation.
pub struct RunCommand {
    source: ConfigSource,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(source: ConfigSource, args: RunArgs) -> Self {
        Self { source, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Run against a specific backend.
    pub fn execute_with(
        &self,
        backend: &dyn PackageBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = load_config(&self.source)?;
        self.run(&config, backend, ui)
    }

    fn run(
        &self,
        config: &DepsureConfig,
        backend: &dyn PackageBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let table = select(config.package_table(), &self.args.only, &self.args.skip)?;

        tracing::debug!(
            "Ensuring {} packages from {}",
            table.len(),
            self.source.describe()
        );

        let installer = Installer::new(backend, &table);
        let outcomes = installer.run_all(&table.requests);

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&outcomes)?);
        }

        Ok(CommandResult::success())
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.source)?;

        let mut settings = config.settings.clone();
        if let Some(python) = &self.args.python {
            settings.python = python.clone();
        }

        let backend = PipBackend::from_settings(&settings);
        self.run(&config, &backend, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepsureError;
    use crate::installer::{MockBackend, MockResponse};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn source(yaml: &str) -> (TempDir, ConfigSource) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("depsure.yml");
        fs::write(&path, yaml).unwrap();
        (temp, ConfigSource::File(path))
    }

    #[test]
    fn failures_do_not_change_exit_code() {
        let (_temp, source) = source("packages: [numpy, nonexistent-pkg-xyz]\n");
        let backend = MockBackend::new().with_installed("numpy");
        let mut ui = MockUI::new();

        let result = RunCommand::new(source, RunArgs::default())
            .execute_with(&backend, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.messages().is_empty());
        assert_eq!(backend.install_count("nonexistent-pkg-xyz"), 2);
    }

    #[test]
    fn json_reports_outcomes_in_order() {
        let (_temp, source) = source("packages: [numpy, scipy, nope]\n");
        let backend = MockBackend::new()
            .with_installed("numpy")
            .with_responses("scipy", [MockResponse::Success]);
        let mut ui = MockUI::new();
        let args = RunArgs {
            json: true,
            ..Default::default()
        };

        RunCommand::new(source, args)
            .execute_with(&backend, &mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        let kinds: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["kind"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["already_present", "installed_clean", "failed"]);
    }

    #[test]
    fn only_limits_the_run() {
        let (_temp, source) = source("packages: [numpy, scipy]\n");
        let backend = MockBackend::new().with_responses("scipy", [MockResponse::Success]);
        let mut ui = MockUI::new();
        let args = RunArgs {
            only: vec!["scipy".into()],
            ..Default::default()
        };

        RunCommand::new(source, args)
            .execute_with(&backend, &mut ui)
            .unwrap();

        assert_eq!(backend.install_count("numpy"), 0);
        assert_eq!(backend.install_count("scipy"), 1);
    }

    #[test]
    fn unknown_only_name_is_error() {
        let (_temp, source) = source("packages: [numpy]\n");
        let backend = MockBackend::new();
        let mut ui = MockUI::new();
        let args = RunArgs {
            only: vec!["numpyy".into()],
            ..Default::default()
        };

        let err = RunCommand::new(source, args)
            .execute_with(&backend, &mut ui)
            .unwrap_err();

        assert!(matches!(err, DepsureError::UnknownPackage { .. }));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn missing_config_is_error() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource::File(temp.path().join("missing.yml"));
        let mut ui = MockUI::new();

        let err = RunCommand::new(source, RunArgs::default())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, DepsureError::ConfigNotFound { .. }));
    }
}
