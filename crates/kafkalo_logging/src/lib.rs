//! Shared logging utilities for kafkalo binaries.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "kafkalo=info,kafkalo_connect=info";

/// Logging configuration shared by kafkalo binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
}

/// Initialize tracing with a daily rolling file writer and stderr output.
///
/// The console only shows warnings unless `verbose` is set, so table output on
/// stdout stays clean. If the log directory cannot be created the file layer
/// is skipped with a warning on stderr.
///
/// Keep the returned guard alive for the lifetime of the process; dropping it
/// flushes and stops the background file writer.
pub fn init_logging(config: LogConfig<'_>) -> Option<WorkerGuard> {
    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let console_filter = if config.verbose {
        file_filter.clone()
    } else {
        EnvFilter::new("warn")
    };

    let mut guard = None;
    let file_layer = match ensure_logs_dir() {
        Ok(log_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(log_dir, format!("{}.log", config.app_name));
            let (file_writer, worker_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(worker_guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_filter(file_filter),
            )
        }
        Err(err) => {
            eprintln!("Warning: failed to create logs directory: {:#}", err);
            None
        }
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .init();

    guard
}

/// Get the kafkalo home directory: ~/.kafkalo
pub fn kafkalo_home() -> Result<PathBuf> {
    if let Ok(override_path) = std::env::var("KAFKALO_HOME") {
        return Ok(PathBuf::from(override_path));
    }
    dirs::home_dir()
        .map(|home| home.join(".kafkalo"))
        .context("Could not determine home directory. Set KAFKALO_HOME to continue.")
}

/// Get the logs directory: ~/.kafkalo/logs
pub fn logs_dir() -> Result<PathBuf> {
    Ok(kafkalo_home()?.join("logs"))
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir()?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs)
}
