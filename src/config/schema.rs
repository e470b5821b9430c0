//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every field has a default, so an empty file is a valid configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the secrets agent renders its output by default.
pub const DEFAULT_SECRET_PATH: &str = "/opt/vault-agent/secrets/secret.json";

/// Default location of the append-only activity log.
pub const DEFAULT_LOG_PATH: &str = "/opt/vault-agent/logs/dummy-app.log";

/// Root configuration for the watcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// JSON file rendered by the secrets agent. Never written to.
    pub secret_path: PathBuf,

    /// Log file; created on first use and only ever appended to.
    pub log_path: PathBuf,

    /// Delay between successful iterations, in seconds.
    pub poll_interval_secs: u64,

    /// Delay after an iteration fails unexpectedly, in seconds.
    pub error_backoff_secs: u64,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl WatcherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn error_backoff(&self) -> Duration {
        Duration::from_secs(self.error_backoff_secs)
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            secret_path: PathBuf::from(DEFAULT_SECRET_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            poll_interval_secs: 10,
            error_backoff_secs: 30,
            log_level: "info".to_string(),
        }
    }
}
