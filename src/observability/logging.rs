//! Structured logging.
//!
//! # Responsibilities
//! - Install the tracing subscriber
//! - Mirror every line to stdout and to the log file
//! - Keep the log file append-only
//!
//! # Design Decisions
//! - Plain text with a `YYYY-MM-DD HH:MM:SS` local timestamp
//! - Level from RUST_LOG when set, otherwise from config
//! - The file appender never rotates, so one file grows for the life of
//!   the deployment

use std::path::Path;

use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::WatcherConfig;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("log path {0} has no file name")]
    InvalidLogPath(String),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: InitError,
    },

    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Appender for `path` that creates parent directories and only appends.
pub fn log_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidLogPath(path.display().to_string()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|source| LoggingError::LogFile {
            path: path.display().to_string(),
            source,
        })
}

/// Initialize the global subscriber.
pub fn init_logging(config: &WatcherConfig) -> Result<(), LoggingError> {
    let appender = log_appender(&config.log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()));
    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()).with_target(false))
        .with(
            fmt::layer()
                .with_timer(timer)
                .with_target(false)
                .with_ansi(false)
                .with_writer(appender),
        )
        .try_init()?;

    tracing::debug!(path = %config.log_path.display(), "Logging initialized");
    Ok(())
}
