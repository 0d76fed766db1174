//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::logging::DEFAULT_LOG_FILE;

/// depsure - Check, install and troubleshoot Python package dependencies.
#[derive(Debug, Parser)]
#[command(name = "depsure")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to package table (overrides ./depsure.yml and the built-in table)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// File that install decisions are appended to
    #[arg(long, global = true, env = "DEPSURE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Mirror log records to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check and install every package (default if no command specified)
    Run(RunArgs),

    /// Report which packages are installed without installing anything
    Status(StatusArgs),

    /// Show the package table
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Run only specified packages (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip specified packages (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Interpreter whose pip is used (overrides settings.python)
    #[arg(long, value_name = "EXE")]
    pub python: Option<String>,

    /// Print per-package outcomes as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Check only specified packages (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Interpreter to query (overrides settings.python)
    #[arg(long, value_name = "EXE")]
    pub python: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["depsure"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn run_parses_comma_lists() {
        let cli = Cli::parse_from(["depsure", "run", "--only", "numpy,scipy", "--skip", "dgl"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.only, vec!["numpy", "scipy"]);
        assert_eq!(args.skip, vec!["dgl"]);
        assert!(!args.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "depsure",
            "status",
            "--config",
            "deps.yml",
            "--log-file",
            "/tmp/x.log",
            "--debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("deps.yml")));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/x.log"));
        assert!(cli.debug);
    }

    #[test]
    fn python_override() {
        let cli = Cli::parse_from(["depsure", "run", "--python", "/usr/bin/python3.12"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.python.as_deref(), Some("/usr/bin/python3.12"));
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["depsure", "completions"]).is_err());
        let cli = Cli::parse_from(["depsure", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
