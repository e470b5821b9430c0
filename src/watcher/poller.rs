//! The polling loop.
//!
//! # Responsibilities
//! - Read the secret file once per iteration
//! - Compare against the previous snapshot and log transitions
//! - Absorb per-iteration failures behind one error boundary
//! - Stop when the shutdown signal fires

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::config::WatcherConfig;
use crate::watcher::masking::RecognizedKey;
use crate::watcher::snapshot::{read_config, Snapshot};
use crate::watcher::types::{Notice, WatchError};

/// Counters kept across iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchStats {
    pub iterations: u64,
    pub changes: u64,
    pub failures: u64,
}

/// Polls one secret file and reports what changed.
pub struct SecretWatcher {
    config: WatcherConfig,
    last_snapshot: Snapshot,
    stats: WatchStats,
}

impl SecretWatcher {
    pub fn new(config: WatcherConfig) -> Self {
        Self {
            config,
            last_snapshot: Snapshot::default(),
            stats: WatchStats::default(),
        }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// The snapshot the next iteration compares against.
    pub fn last_snapshot(&self) -> &Snapshot {
        &self.last_snapshot
    }

    pub fn stats(&self) -> WatchStats {
        self.stats
    }

    /// Read the secret file and observe its contents.
    pub fn poll_once(&mut self) -> Result<Vec<Notice>, WatchError> {
        let current = read_config(&self.config.secret_path);
        self.observe(current)
    }

    /// Compare `current` with the previous snapshot, logging each notice as
    /// it is produced.
    ///
    /// On error the previous snapshot is kept, so the same content fails
    /// again on the next iteration.
    pub fn observe(&mut self, current: Snapshot) -> Result<Vec<Notice>, WatchError> {
        let mut notices = Vec::new();
        if current == self.last_snapshot {
            return Ok(notices);
        }

        record(&mut notices, Notice::ConfigChanged);

        if current.is_empty() {
            record(&mut notices, Notice::ConfigUnavailable);
        } else {
            record(&mut notices, Notice::ConfigApplied(current.masked()?));
            for key in RecognizedKey::present_in(&current) {
                record(&mut notices, Notice::SecretInUse(key));
            }
        }

        self.stats.changes += 1;
        self.last_snapshot = current;
        Ok(notices)
    }

    /// Run one iteration behind the error boundary and return how long to
    /// wait before the next one.
    pub fn tick(&mut self) -> Duration {
        self.stats.iterations += 1;
        match self.poll_once() {
            Ok(_) => self.config.poll_interval(),
            Err(e) => {
                self.stats.failures += 1;
                tracing::error!("Unexpected error: {}", e);
                self.config.error_backoff()
            }
        }
    }

    /// Poll until shutdown is signalled.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!("Secret watcher started - monitoring for secret updates");
        tracing::info!("Monitoring file: {}", self.config.secret_path.display());

        loop {
            let delay = self.tick();

            tokio::select! {
                _ = sleep(delay) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Application shutting down gracefully");
                    break;
                }
            }
        }
    }
}

fn record(notices: &mut Vec<Notice>, notice: Notice) {
    notice.log();
    notices.push(notice);
}
