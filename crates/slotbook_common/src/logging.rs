//! Logging utilities for the Slotbook workspace.
//!
//! Every binary calls [`init_from_config`] once at start-up. Library
//! crates only use the `tracing` macros.

use slotbook_config::LoggingConfig;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix of the daily rolling log files.
const LOG_FILE_PREFIX: &str = "slotbook.log";

/// Initialize logging from the `[logging]` configuration section.
///
/// Adds a daily rolling file when `file_dir` is set and a journald layer when
/// `journald` is set (Linux only). Keep the returned guard alive for the
/// lifetime of the process, or buffered file output is lost.
pub fn init_from_config(config: &LoggingConfig) -> Option<WorkerGuard> {
    let level = config.level.as_deref().unwrap_or("info");

    let (file_layer, guard) = match config.file_dir.as_deref() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(stdout_layer())
        .with(file_layer)
        .with(journald_layer(config.journald))
        .with(env_filter(level))
        .try_init();

    if result.is_ok() {
        info!(
            "Logging initialized (filter: {}, file: {:?}, journald: {})",
            level, config.file_dir, config.journald
        );
    }
    guard
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn stdout_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
}

#[cfg(target_os = "linux")]
fn journald_layer(enabled: bool) -> Option<tracing_journald::Layer> {
    if !enabled {
        return None;
    }
    match tracing_journald::layer() {
        Ok(layer) => Some(layer),
        Err(e) => {
            eprintln!("journald unavailable, continuing without it: {}", e);
            None
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn journald_layer(enabled: bool) -> Option<tracing_subscriber::layer::Identity> {
    if enabled {
        eprintln!("journald logging is only supported on Linux");
    }
    None
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so the call can sit in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
