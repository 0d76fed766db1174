//! Per-package failure taxonomy.
//!
//! Every variant is recovered inside [`Installer::ensure`](super::Installer::ensure);
//! none of them stop a run.

use thiserror::Error;

use super::patterns::{classify, FailureSignal};
use crate::shell::CommandResult;

/// Why an install step did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallFailure {
    /// The presence check itself errored. Treated as "not installed".
    #[error("could not query installed distributions for '{package}': {message}")]
    EnvironmentQuery { package: String, message: String },

    /// Non-zero exit with no recognizable cause.
    #[error("installer exited with code {code:?}: {stderr}")]
    Subprocess { code: Option<i32>, stderr: String },

    /// The install location was not writable.
    #[error("permission denied: {stderr}")]
    Permission { stderr: String },

    /// The package index has no such distribution.
    #[error("package could not be resolved: {stderr}")]
    Unresolved { stderr: String },

    /// The installer could not be run at all.
    #[error("{message}")]
    Unknown { message: String },
}

impl InstallFailure {
    /// Classify a finished install. Returns `None` when it succeeded.
    pub fn from_result(result: &CommandResult) -> Option<Self> {
        if result.success {
            return None;
        }

        let stderr = result.diagnostic().to_string();
        let failure = match classify(&stderr) {
            FailureSignal::Permission => Self::Permission { stderr },
            FailureSignal::Unresolved => Self::Unresolved { stderr },
            FailureSignal::Unclassified => Self::Subprocess {
                code: result.exit_code,
                stderr,
            },
        };
        Some(failure)
    }
}
