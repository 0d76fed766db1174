//! Terminal output.
//!
//! Commands write through [`UserInterface`] so tests can capture output
//! with [`MockUI`] instead of reading stdout.

pub mod mock;

pub use mock::MockUI;

/// Output surface for commands.
pub trait UserInterface {
    /// Show a line on stdout.
    fn message(&mut self, msg: &str);

    /// Show a warning on stderr.
    fn warning(&mut self, msg: &str);

    /// Show an error on stderr.
    fn error(&mut self, msg: &str);
}

/// Writes straight to the process's stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalUI;

impl TerminalUI {
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}
