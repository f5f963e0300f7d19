//! Logging setup for the Icarus Drone Service.
//!
//! The engine itself only emits `tracing` events. The host application
//! installs a subscriber once at startup with one of:
//! - [`init_tracing`]: stderr only
//! - [`init_from_settings`]: stderr plus a `trace.log` file in the
//!   configured logs folder
//!
//! # Example
//!
//! ```no_run
//! use icarus_core::config::ConfigManager;
//! use icarus_core::logging;
//!
//! let mut config = ConfigManager::new(".config/icarus.toml");
//! config.load_or_create().unwrap();
//!
//! // Keep the guard alive for the whole session so the file is flushed.
//! let _guard = logging::init_from_settings(&config.settings().logging).unwrap();
//! tracing::info!("=== Icarus Drone Service starting ===");
//! ```

mod types;

pub use types::LogLevel;

use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingSettings;

/// Errors raised while installing the global subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to prepare log folder: {0}")]
    Io(#[from] io::Error),

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(env_filter(default_level))
        .try_init()?;
    Ok(())
}

/// Initialize tracing from the `[logging]` config section.
///
/// Writes to stderr and, when `logs_folder` is non-empty, appends to
/// `<logs_folder>/<file_name>` through a background writer. The returned
/// guard flushes that writer on drop.
pub fn init_from_settings(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, LoggingError> {
    let (file_layer, guard) = if settings.logs_folder.is_empty() {
        (None, None)
    } else {
        let (writer, guard) = file_writer(Path::new(&settings.logs_folder), &settings.file_name)?;
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(settings.with_target);
        (Some(layer), Some(guard))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(settings.with_target),
        )
        .with(file_layer)
        .with(env_filter(settings.level))
        .try_init()?;

    Ok(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

fn file_writer(
    dir: &Path,
    file_name: &str,
) -> io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
