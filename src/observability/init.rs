//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring the level filter to
//! the plugin configuration and directing formatted output to the rotating
//! log file in the plugin data directory.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// Sets up a pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats them without ANSI styling
/// 3. Appends to a rotating file with backups
///
/// # Trace Level Resolution
///
/// Level is determined by `config.trace_level` if set, defaulting to
/// `"info"`. The value accepts full `EnvFilter` directives, so targeted
/// filters like `"truthlens=debug"` work too.
///
/// # File Location
///
/// Logs are written to `~/.local/share/zellij/truthlens/truthlens.log`
/// (`/host/.local/share/zellij/truthlens` inside Zellij's sandbox).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (observability is
///   optional)
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_file = data_dir.join("truthlens.log");
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
