//! The ensure/run loop.

use tracing::{debug, error, info, warn};

use super::backend::{InstallScope, PackageBackend};
use super::failure::InstallFailure;
use super::outcome::{InstallOutcome, OutcomeKind};
use super::request::{PackageRequest, PackageTable};

/// Checks, installs and troubleshoots packages through a backend.
///
/// Strictly sequential: one subprocess at a time, in list order.
pub struct Installer<'a, B: PackageBackend + ?Sized> {
    backend: &'a B,
    table: &'a PackageTable,
}

impl<'a, B: PackageBackend + ?Sized> Installer<'a, B> {
    /// Create an installer. `table` supplies advisories.
    pub fn new(backend: &'a B, table: &'a PackageTable) -> Self {
        Self { backend, table }
    }

    /// Make sure one package is present.
    ///
    /// Never fails: every error is logged and folded into the outcome.
    pub fn ensure(&self, request: &PackageRequest) -> InstallOutcome {
        let name = request.name.as_str();

        if let Some(advisory) = self.table.advisory(name) {
            warn!("{}", advisory);
        }

        let mut query_error = None;
        match self.backend.is_installed(name) {
            Ok(true) => {
                info!("{} is already installed.", name);
                return InstallOutcome::new(name, OutcomeKind::AlreadyPresent);
            }
            Ok(false) => {}
            Err(failure) => {
                error!("Unexpected error when checking {}. Error: {}", name, failure);
                query_error = Some(failure.to_string());
            }
        }

        let target = request.install_target();
        if target != name {
            debug!("Installing {} as {}", name, target);
        }

        let first = self.attempt(target, InstallScope::Environment);
        let outcome = match first {
            Ok(()) => {
                info!("Successfully installed {}.", name);
                InstallOutcome::new(name, OutcomeKind::InstalledClean)
            }
            Err(failure) => {
                error!("Error installing {}: {}", name, failure);
                match self.troubleshoot(name, target) {
                    Ok(()) => {
                        info!("Successfully installed {} after troubleshooting.", name);
                        InstallOutcome::new(name, OutcomeKind::InstalledAfterTroubleshooting)
                    }
                    Err(failure) => {
                        error!(
                            "Failed to install {} after troubleshooting. Error: {}",
                            name, failure
                        );
                        return InstallOutcome::new(name, OutcomeKind::Failed)
                            .with_diagnostic(failure.to_string());
                    }
                }
            }
        };

        match query_error {
            Some(message) => outcome.with_diagnostic(message),
            None => outcome,
        }
    }

    /// Ensure every request in order. Failures never stop the loop.
    pub fn run_all(&self, requests: &[PackageRequest]) -> Vec<InstallOutcome> {
        requests
            .iter()
            .map(|request| {
                let outcome = self.ensure(request);
                if outcome.kind == OutcomeKind::Failed {
                    error!(
                        "Final failure installing {}. Please check the logs for detailed error information and possible solutions.",
                        request.name
                    );
                }
                outcome
            })
            .collect()
    }

    fn attempt(&self, target: &str, scope: InstallScope) -> Result<(), InstallFailure> {
        match self.backend.install(target, scope) {
            Ok(result) => match InstallFailure::from_result(&result) {
                None => Ok(()),
                Some(failure) => Err(failure),
            },
            Err(e) => Err(InstallFailure::Unknown {
                message: e.to_string(),
            }),
        }
    }

    /// One bounded retry sequence after a failed install.
    fn troubleshoot(&self, name: &str, target: &str) -> Result<(), InstallFailure> {
        info!("Attempting to troubleshoot installation issue for {}", name);

        match self.attempt(target, InstallScope::Environment) {
            Ok(()) => Ok(()),
            Err(InstallFailure::Permission { .. }) => {
                info!(
                    "Permission issue detected when installing {}. Retrying with a user-scoped install.",
                    name
                );
                self.attempt(target, InstallScope::User)
            }
            Err(failure @ InstallFailure::Unresolved { .. }) => {
                info!("Package {} not found. No further retries.", name);
                Err(failure)
            }
            Err(failure) => Err(failure),
        }
    }
}
