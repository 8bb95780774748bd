//! File logging.
//!
//! The terminal belongs to the TUI, so log output goes to `folio.log` in
//! the platform data directory instead.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

const LOG_FILE: &str = "folio.log";
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to `dir`.
///
/// Returns `None` and logs nothing when there is no directory or it cannot
/// be created. Keep the guard alive until exit so buffered lines are flushed.
pub fn init(dir: Option<&Path>) -> Option<WorkerGuard> {
    let dir = dir?;
    fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()
        .ok()?;
    Some(guard)
}
