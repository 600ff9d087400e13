//! Logging setup: a dated log file (`YYYY-MM-DD.log`) in the platform logs
//! directory, written through a non-blocking daily-rolling appender.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level filter seed (e.g. "info", "debug"); `RUST_LOG` wins when set.
    pub level: String,
    /// Include source file and line number in log records.
    pub report_caller: bool,
    /// Directory for dated log files.
    pub log_dir: PathBuf,
}

/// Initializes the tracing subscriber.
///
/// Returns a WorkerGuard that must be held for the lifetime of the run to
/// ensure all logs are flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {:?}", config.log_dir))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_suffix("log")
        .build(&config.log_dir)
        .context("failed to open log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_file(config.report_caller)
        .with_line_number(config.report_caller)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.level,
        log_dir = ?config.log_dir,
        "logging initialized"
    );

    Ok(guard)
}
