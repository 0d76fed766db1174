//! Log setup.
//!
//! Every decision the installer makes is appended to a log file, one record
//! per line:
//!
//! ```text
//! 2024-05-01 09:14:03,512:INFO:numpy is already installed.
//! 2024-05-01 09:14:09,877:WARNING:May require system-level installation.
//! ```
//!
//! Newlines inside a message (pip's stderr spans several lines) are written
//! as a literal `\n` so a record never continues onto an unprefixed line.
//!
//! `--verbose` or `--debug` additionally mirrors records to stderr.

use chrono::Local;
use std::fmt;
use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt as tfmt, prelude::*, EnvFilter};

use crate::error::{DepsureError, Result};

/// Log file used when none is given.
pub const DEFAULT_LOG_FILE: &str = "library_installation.log";

/// `<date> <time>,<millis>`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Formats events as `<timestamp>:<LEVEL>:<message>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{}:{}:",
            Local::now().format(TIMESTAMP_FORMAT),
            level_name(event.metadata().level())
        )?;
        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;
        writeln!(writer, "{}", single_line(&message))
    }
}

fn single_line(message: &str) -> String {
    message.trim_end().replace("\r\n", "\n").replace('\n', "\\n")
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Logging options from the command line.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Destination file, appended to.
    pub file: PathBuf,

    /// Mirror records to stderr.
    pub verbose: bool,

    /// Lower the filter to `depsure=debug`.
    pub debug: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
            debug: false,
        }
    }
}

/// Install the global subscriber.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// The returned guard flushes the file writer when dropped; hold it until
/// the process exits.
pub fn init_logging(options: &LogOptions) -> Result<WorkerGuard> {
    let file = open_log_file(&options.file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = if options.debug {
        EnvFilter::new("depsure=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depsure=info"))
    };

    let file_layer = tfmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(writer);

    let stderr_layer = (options.verbose || options.debug).then(|| {
        tfmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    Ok(guard)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    let setup_error = |message: String| DepsureError::LogSetup {
        path: path.to_path_buf(),
        message,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| setup_error(e.to_string()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| setup_error(e.to_string()))
}
