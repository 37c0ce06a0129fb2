//! File logging setup.
//!
//! The TUI owns the terminal, so nothing may write to stdout/stderr while
//! the app runs. Log macros (`log::*`) are bridged into `tracing` and
//! written to a daily-rotating file under the configured log directory.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize file logging. Returns the appender guard, which must be held
/// for the lifetime of the process so buffered lines are flushed on exit.
///
/// Returns `None` when the log directory cannot be created or a global
/// subscriber is already installed; the app still runs, just unlogged.
pub fn init(log_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("warning: cannot create log dir {}: {e}", log_dir.display());
        return None;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(log_dir, "enroll.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    // Route log:: macros through tracing
    if tracing_log::LogTracer::init().is_err() {
        return None;
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_unwritable_dir_returns_none() {
        // /proc is not writable; init must degrade instead of panicking
        let guard = init(Path::new("/proc/enroll-logs"));
        assert!(guard.is_none());
    }
}
