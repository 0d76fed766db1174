//! depsure - Check, install and troubleshoot Python package dependencies.
//!
//! Given a table of package names, depsure checks whether each one is
//! present in the interpreter's environment, installs the missing ones with
//! pip, and runs one bounded troubleshooting pass when an install fails.
//! Every decision is appended to a log file. A failed package never stops
//! the run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Package table loading and validation
//! - [`error`] - Error types and result aliases
//! - [`installer`] - The ensure/run loop, backends and failure classification
//! - [`logging`] - Log file setup and record format
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depsure::installer::{Installer, MockBackend, OutcomeKind, PackageTable};
//!
//! let backend = MockBackend::new().with_installed("numpy");
//! let table = PackageTable::from_names(["numpy", "nonexistent-pkg-xyz"]);
//!
//! let outcomes = Installer::new(&backend, &table).run_all(&table.requests);
//! let kinds: Vec<_> = outcomes.iter().map(|o| o.kind).collect();
//! assert_eq!(kinds, vec![OutcomeKind::AlreadyPresent, OutcomeKind::Failed]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod shell;
pub mod ui;

pub use error::{DepsureError, Result};
