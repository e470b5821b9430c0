//! Decoded contents of the secret file at one polling instant.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

/// The three ways reading the secret file can go wrong.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading config: {0}")]
    Io(#[from] io::Error),

    #[error("Error parsing JSON config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A key/value mapping decoded from a JSON object.
///
/// Keys keep the order they had in the file. Equality is map equality and
/// ignores that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot(Map<String, Value>);

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromStr for Snapshot {
    type Err = serde_json::Error;

    /// Anything other than a JSON object is a decode error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Map<String, Value>>(s).map(Self)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Read and decode the secret file, reporting exactly what went wrong.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SnapshotError::NotFound(path.to_path_buf()),
        _ => SnapshotError::Io(e),
    })?;

    let content = raw.trim();
    tracing::info!("Config file read: {} characters", content.chars().count());

    let snapshot: Snapshot = content.parse()?;
    tracing::info!(
        "Parsed JSON config with keys: {:?}",
        snapshot.keys().collect::<Vec<_>>()
    );

    Ok(snapshot)
}

/// Read the secret file, collapsing every failure into an empty snapshot.
///
/// Callers cannot tell a missing file from a malformed one; the failure is
/// only visible in the log.
pub fn read_config(path: &Path) -> Snapshot {
    match load_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(e @ SnapshotError::NotFound(_)) => {
            tracing::warn!("{}", e);
            Snapshot::default()
        }
        Err(e) => {
            tracing::error!("{}", e);
            Snapshot::default()
        }
    }
}
