//! Mock backend for testing.
//!
//! `MockBackend` implements [`PackageBackend`] against an in-memory set of
//! installed names and scripted install responses, recording every call
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use depsure::installer::{Installer, MockBackend, MockResponse, OutcomeKind, PackageRequest};
//! use depsure::installer::PackageTable;
//!
//! let backend = MockBackend::new()
//!     .with_installed("numpy")
//!     .with_responses("pandas", [MockResponse::Success]);
//!
//! let table = PackageTable::default();
//! let installer = Installer::new(&backend, &table);
//!
//! assert_eq!(installer.ensure(&PackageRequest::new("numpy")).kind, OutcomeKind::AlreadyPresent);
//! assert_eq!(installer.ensure(&PackageRequest::new("pandas")).kind, OutcomeKind::InstalledClean);
//! assert_eq!(backend.install_count("numpy"), 0);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

use super::backend::{InstallScope, PackageBackend};
use super::failure::InstallFailure;
use crate::error::{DepsureError, Result};
use crate::shell::CommandResult;

/// A scripted response to one install call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Exit 0.
    Success,
    /// Exit 1 with this stderr.
    Fail(String),
    /// The installer could not be started.
    SpawnError,
}

impl MockResponse {
    /// Exit 1 with pip's permission error.
    pub fn permission_denied() -> Self {
        Self::Fail(
            "ERROR: Could not install packages due to an OSError: [Errno 13] Permission denied: '/usr/lib/python3'"
                .to_string(),
        )
    }

    /// Exit 1 with pip's unresolvable-name error.
    pub fn not_found(target: &str) -> Self {
        Self::Fail(format!(
            "ERROR: Could not find a version that satisfies the requirement {target} (from versions: none)\n\
             ERROR: No matching distribution found for {target}\n"
        ))
    }
}

/// A call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Query(String),
    Install { target: String, scope: InstallScope },
}

/// In-memory backend for tests.
///
/// Install calls for a target with no queued response fail as if the
/// index had no such distribution.
#[derive(Debug, Default)]
pub struct MockBackend {
    installed: HashSet<String>,
    query_errors: HashSet<String>,
    responses: RefCell<HashMap<String, VecDeque<MockResponse>>>,
    calls: RefCell<Vec<BackendCall>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a distribution as already installed.
    pub fn with_installed(mut self, name: &str) -> Self {
        self.installed.insert(name.to_string());
        self
    }

    /// Make the presence query for `name` error out.
    pub fn with_query_error(mut self, name: &str) -> Self {
        self.query_errors.insert(name.to_string());
        self
    }

    /// Queue responses for successive installs of `target`.
    pub fn with_responses<I>(self, target: &str, responses: I) -> Self
    where
        I: IntoIterator<Item = MockResponse>,
    {
        self.responses
            .borrow_mut()
            .entry(target.to_string())
            .or_default()
            .extend(responses);
        self
    }

    /// Every call, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    /// Install calls for `target`, in order.
    pub fn installs_of(&self, target: &str) -> Vec<InstallScope> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Install { target: t, scope } if t == target => Some(*scope),
                _ => None,
            })
            .collect()
    }

    /// Number of install calls for `target`.
    pub fn install_count(&self, target: &str) -> usize {
        self.installs_of(target).len()
    }
}

impl PackageBackend for MockBackend {
    fn is_installed(&self, name: &str) -> std::result::Result<bool, InstallFailure> {
        self.calls
            .borrow_mut()
            .push(BackendCall::Query(name.to_string()));

        if self.query_errors.contains(name) {
            return Err(InstallFailure::EnvironmentQuery {
                package: name.to_string(),
                message: "mock query error".to_string(),
            });
        }
        Ok(self.installed.contains(name))
    }

    fn install(&self, target: &str, scope: InstallScope) -> Result<CommandResult> {
        self.calls.borrow_mut().push(BackendCall::Install {
            target: target.to_string(),
            scope,
        });

        let response = self
            .responses
            .borrow_mut()
            .get_mut(target)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| MockResponse::not_found(target));

        match response {
            MockResponse::Success => Ok(CommandResult::success(
                format!("Successfully installed {}", target),
                String::new(),
                Duration::ZERO,
            )),
            MockResponse::Fail(stderr) => Ok(CommandResult::failure(
                Some(1),
                String::new(),
                stderr,
                Duration::ZERO,
            )),
            MockResponse::SpawnError => Err(DepsureError::CommandStart {
                command: format!("mock install {}", target),
                message: "No such file or directory (os error 2)".to_string(),
            }),
        }
    }
}
