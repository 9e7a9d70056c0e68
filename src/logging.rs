//! File logging setup.
//!
//! Logs go to a daily-rolling file under the profile root so the
//! fullscreen TUI is never written over.

use std::env;
use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::paths::logs_dir;

/// Environment variable selecting the log level
pub const LOG_ENV: &str = "BUYER_PROFILE_LOG";

/// Log file name prefix; the appender adds the date
pub const LOG_FILE: &str = "buyer-profile.log";

/// Level from `BUYER_PROFILE_LOG`, falling back to `info`
pub fn log_level() -> Level {
    env::var(LOG_ENV)
        .ok()
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines when dropped, so hold it for
/// the life of the process. Returns `None` if the log directory is unusable
/// or a subscriber was already set; the program then runs without logging.
pub fn init_logging() -> Option<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .build(logs_dir())
        .ok()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level())
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
