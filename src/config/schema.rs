//! Configuration schema.
//!
//! ```yaml
//! settings:
//!   python: python3
//!   user_flag: --user
//!   pip_args: [--no-cache-dir]
//! packages: [numpy, torch]
//! aliases:
//!   torch: pytorch
//! advisories:
//!   graphviz: May require system-level installation.
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::installer::{PackageRequest, PackageTable};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepsureConfig {
    /// Installer settings.
    pub settings: Settings,

    /// Package names, attempted in this order.
    pub packages: Vec<String>,

    /// Package name to installable name.
    pub aliases: BTreeMap<String, String>,

    /// Package name to advisory text.
    pub advisories: BTreeMap<String, String>,
}

impl DepsureConfig {
    /// Build the installer's package table.
    pub fn package_table(&self) -> PackageTable {
        let requests = self
            .packages
            .iter()
            .map(|name| match self.aliases.get(name) {
                Some(alias) => PackageRequest::with_alias(name.as_str(), alias.as_str()),
                None => PackageRequest::new(name.as_str()),
            })
            .collect();

        PackageTable {
            requests,
            advisories: self
                .advisories
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// Installer settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Interpreter whose pip is used (`<python> -m pip`).
    pub python: String,

    /// Flag added on the permission retry.
    pub user_flag: String,

    /// Extra arguments placed before the package name on every install.
    pub pip_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            user_flag: "--user".to_string(),
            pip_args: Vec::new(),
        }
    }
}

fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}
