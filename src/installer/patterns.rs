//! Installer output patterns.
//!
//! Failed installs are sorted by what the installer printed. A permission
//! problem is worth one user-scoped retry; an unresolvable name is not worth
//! retrying at all.

use regex::Regex;
use std::sync::LazyLock;

/// What a failed install's output points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSignal {
    /// The install location is not writable.
    Permission,
    /// The index has no distribution by that name.
    Unresolved,
    /// Nothing recognizable.
    Unclassified,
}

// --- Compiled regexes (one-time via LazyLock) ---

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_PERMISSION_DENIED, r"Permission denied|\[Errno 13\]");
lazy_regex!(
    RE_NOT_FOUND,
    r"not found|No matching distribution found|Could not find a version that satisfies"
);

/// Classify installer output. Permission is checked first.
pub fn classify(output: &str) -> FailureSignal {
    if RE_PERMISSION_DENIED.is_match(output) {
        FailureSignal::Permission
    } else if RE_NOT_FOUND.is_match(output) {
        FailureSignal::Unresolved
    } else {
        FailureSignal::Unclassified
    }
}
