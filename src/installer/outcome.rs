//! Per-package installation outcomes.

use serde::Serialize;
use std::fmt;

/// How a package ended up after `ensure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Found in the environment; nothing was installed.
    AlreadyPresent,
    /// The first install attempt succeeded.
    InstalledClean,
    /// Installed during the troubleshooting pass.
    InstalledAfterTroubleshooting,
    /// Every attempt failed.
    Failed,
}

impl OutcomeKind {
    /// Whether the package is usable after the run.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed)
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AlreadyPresent => "already present",
            Self::InstalledClean => "installed",
            Self::InstalledAfterTroubleshooting => "installed after troubleshooting",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Result of ensuring one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallOutcome {
    pub package: String,
    pub kind: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl InstallOutcome {
    pub fn new(package: impl Into<String>, kind: OutcomeKind) -> Self {
        Self {
            package: package.into(),
            kind,
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }
}
