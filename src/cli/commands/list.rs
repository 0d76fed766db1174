//! List command implementation.
//!
//! The `depsure list` command shows the package table: names, install
//! aliases and advisories.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::{load_config, ConfigSource};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory: Option<&'a str>,
}

/// The list command implementation.
pub struct ListCommand {
    source: ConfigSource,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(source: ConfigSource, args: ListArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.source)?;
        let table = config.package_table();

        let entries: Vec<ListEntry<'_>> = table
            .requests
            .iter()
            .map(|r| ListEntry {
                name: &r.name,
                alias: r.alias.as_deref(),
                advisory: table.advisory(&r.name),
            })
            .collect();

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&entries)?);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Packages ({}):", self.source.describe()));
        for entry in &entries {
            match entry.alias {
                Some(alias) => ui.message(&format!("  {} (installs {})", entry.name, alias)),
                None => ui.message(&format!("  {}", entry.name)),
            }
            if let Some(advisory) = entry.advisory {
                ui.message(&format!("    {}", advisory));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_builtin_table() {
        let mut ui = MockUI::new();

        let result = ListCommand::new(ConfigSource::BuiltIn, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let output = ui.output();
        assert!(output.contains("built-in package table"));
        assert!(output.contains("  torch (installs pytorch)"));
        assert!(output.contains("May require installation of Java and Spark"));
    }

    #[test]
    fn json_lists_every_entry() {
        let mut ui = MockUI::new();
        let args = ListArgs { json: true };

        ListCommand::new(ConfigSource::BuiltIn, args)
            .execute(&mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 39);
        assert_eq!(entries[0]["name"], "numpy");
        assert!(entries[0].get("alias").is_none());
    }
}
