//! depsure CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use depsure::cli::{Cli, CommandDispatcher, Commands};
use depsure::logging::{init_logging, LogOptions};
use depsure::ui::{TerminalUI, UserInterface};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut ui = TerminalUI::new();

    // Completion scripts go to stdout and should not touch the log file.
    let wants_log = !matches!(cli.command, Some(Commands::Completions(_)));
    let _guard = if wants_log {
        let options = LogOptions {
            file: cli.log_file.clone(),
            verbose: cli.verbose,
            debug: cli.debug,
        };
        match init_logging(&options) {
            Ok(guard) => Some(guard),
            Err(e) => {
                ui.warning(&format!("{}; continuing without a log file", e));
                None
            }
        }
    } else {
        None
    };

    tracing::debug!("depsure starting with args: {:?}", cli);

    let working_dir = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(working_dir, cli.config.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tracing::error!("{}", e);
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
