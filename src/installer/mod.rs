//! Dependency installation.
//!
//! For each [`PackageRequest`] the [`Installer`]:
//!
//! 1. Logs the package's advisory, if any (informational only)
//! 2. Asks the [`PackageBackend`] whether the distribution is present
//! 3. Installs it when missing, using the alias if one is configured
//! 4. On failure, runs one troubleshooting pass: a bare reinstall, then a
//!    user-scoped retry if the output shows a permission error. A package
//!    the index cannot resolve is abandoned.
//! 5. Logs and returns an [`InstallOutcome`]
//!
//! Failures never propagate. A run is correct when every entry was
//! attempted, not when every entry succeeded.

pub mod backend;
pub mod failure;
pub mod mock;
pub mod outcome;
pub mod patterns;
pub mod request;
pub mod runner;

pub use backend::{InstallScope, PackageBackend, PipBackend};
pub use failure::InstallFailure;
pub use mock::{BackendCall, MockBackend, MockResponse};
pub use outcome::{InstallOutcome, OutcomeKind};
pub use patterns::{classify, FailureSignal};
pub use request::{PackageRequest, PackageTable};
pub use runner::Installer;
