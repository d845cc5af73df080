//! Tracing initialization and subscriber setup.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::Config;

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "zslideshow.log";

/// Initializes the tracing subscriber writing to the plugin data directory.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set and a valid filter
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if directory creation fails (logging is best effort)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    init_tracing_at(config, &data_dir);
}

/// Same as [`init_tracing`], logging into `dir` instead of the data directory.
///
/// Returns `true` if this call installed the global subscriber.
pub fn init_tracing_at(config: &Config, dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }

    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = FileWriter::new(dir.join(LOG_FILE_NAME));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(level, "tracing initialized");
    }
    installed
}
