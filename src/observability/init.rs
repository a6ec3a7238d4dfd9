//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros to a JSON-lines `fmt` layer that writes into the
//! rotating log file in the data directory.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "forkify.log";

/// Initializes the global tracing subscriber.
///
/// # Filter Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Events are written as JSON lines to `<data_dir>/forkify.log`, rotated at
/// 10 MiB with 3 backups.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Returns `None` without installing anything if that fails (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// Returns the log file path when a subscriber was installed.
///
/// # Example
///
/// ```no_run
/// use forkify::observability::init_tracing;
/// use forkify::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return None;
    }

    let log_file = data_dir.join(LOG_FILE_NAME);
    let writer = RotatingFileWriter::new(log_file.clone());

    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok()
        .map(|()| log_file)
}
