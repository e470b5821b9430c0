//! Partial redaction of secret values for logging.

use std::fmt;

use serde_json::{Map, Value};

use crate::watcher::snapshot::Snapshot;
use crate::watcher::types::WatchError;

/// Shown in place of values too short to reveal any part of.
pub const REDACTED: &str = "***";

/// Values longer than this keep their edges visible.
const MASK_THRESHOLD: usize = 8;
const VISIBLE_EDGE: usize = 4;

/// Mask a single value: `"supersecretvalue"` becomes `"supe...alue"`.
///
/// Lengths are counted in characters, not bytes.
pub fn mask_value(value: &str) -> String {
    let len = value.chars().count();
    if len <= MASK_THRESHOLD {
        return REDACTED.to_string();
    }

    let head: String = value.chars().take(VISIBLE_EDGE).collect();
    let tail: String = value.chars().skip(len - VISIBLE_EDGE).collect();
    format!("{head}...{tail}")
}

/// A snapshot with every value masked, safe to write to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedSnapshot(Map<String, Value>);

impl MaskedSnapshot {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MaskedSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", Value::from(key.as_str()), value)?;
        }
        f.write_str("}")
    }
}

impl Snapshot {
    /// Mask every value. Fails on the first value that is not a string.
    pub fn masked(&self) -> Result<MaskedSnapshot, WatchError> {
        self.iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key.to_string(), Value::from(mask_value(s)))),
                _ => Err(WatchError::NonStringValue {
                    key: key.to_string(),
                }),
            })
            .collect::<Result<Map<_, _>, _>>()
            .map(MaskedSnapshot)
    }
}

/// Keys the application knows how to put to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizedKey {
    ApiKey,
    DatabaseUrl,
    ApiSecret,
}

impl RecognizedKey {
    /// In the order their acknowledgments are logged.
    pub const ALL: [RecognizedKey; 3] = [Self::ApiKey, Self::DatabaseUrl, Self::ApiSecret];

    pub fn key(self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::DatabaseUrl => "database_url",
            Self::ApiSecret => "api_secret",
        }
    }

    pub fn acknowledgment(self) -> &'static str {
        match self {
            Self::ApiKey => "Using API key for authentication",
            Self::DatabaseUrl => "Connecting to database",
            Self::ApiSecret => "API secret configured",
        }
    }

    /// Recognized keys present in `snapshot`, in acknowledgment order.
    pub fn present_in(snapshot: &Snapshot) -> impl Iterator<Item = RecognizedKey> + '_ {
        Self::ALL
            .into_iter()
            .filter(|k| snapshot.contains_key(k.key()))
    }
}
