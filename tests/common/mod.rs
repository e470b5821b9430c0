//! Shared helpers for watcher integration tests.

use std::fs;
use std::path::PathBuf;

use secret_watcher::{SecretWatcher, WatcherConfig};
use tempfile::TempDir;

/// A watcher pointed at files inside a private temp directory.
pub struct Fixture {
    _dir: TempDir,
    pub watcher: SecretWatcher,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = WatcherConfig {
            secret_path: dir.path().join("secrets").join("secret.json"),
            log_path: dir.path().join("logs").join("watcher.log"),
            ..WatcherConfig::default()
        };
        Self {
            _dir: dir,
            watcher: SecretWatcher::new(config),
        }
    }

    pub fn secret_path(&self) -> PathBuf {
        self.watcher.config().secret_path.clone()
    }

    /// Overwrite the secret file, as the agent would on a re-render.
    pub fn render(&self, json: &str) {
        let path = self.secret_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
    }
}

/// Render notices the way they appear in the log.
#[allow(dead_code)]
pub fn lines(notices: &[secret_watcher::watcher::Notice]) -> Vec<String> {
    notices.iter().map(ToString::to_string).collect()
}
