//! Package requests and the table they are drawn from.

use std::collections::HashMap;

/// One installable dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Distribution name, used for the presence query.
    pub name: String,

    /// Installable artifact name, when it differs from `name`.
    pub alias: Option<String>,
}

impl PackageRequest {
    /// Create a request with no alias.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Create a request that installs `alias` in place of `name`.
    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// The name passed to the install command.
    pub fn install_target(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// The ordered package list plus advisories, passed explicitly to the installer.
#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    /// Requests in the order they are attempted. Duplicates are kept.
    pub requests: Vec<PackageRequest>,

    /// Package name to advisory text.
    pub advisories: HashMap<String, String>,
}

impl PackageTable {
    /// Build a table from bare names with no aliases or advisories.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requests: names.into_iter().map(PackageRequest::new).collect(),
            advisories: HashMap::new(),
        }
    }

    /// Attach an advisory to a package name.
    pub fn with_advisory(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.advisories.insert(name.into(), text.into());
        self
    }

    /// Advisory text for a package, if any.
    pub fn advisory(&self, name: &str) -> Option<&str> {
        self.advisories.get(name).map(String::as_str)
    }

    /// Whether any request carries this name.
    pub fn contains(&self, name: &str) -> bool {
        self.requests.iter().any(|r| r.name == name)
    }

    /// Keep only requests accepted by `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&PackageRequest) -> bool) {
        self.requests.retain(|r| keep(r));
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
