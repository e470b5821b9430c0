//! Watcher events and errors.

use std::fmt;

use thiserror::Error;

use crate::watcher::masking::{MaskedSnapshot, RecognizedKey};

/// Failure inside one poll iteration that the read step does not absorb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    #[error("value for {key:?} is not a string")]
    NonStringValue { key: String },
}

/// Something a poll iteration observed and logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The snapshot differs from the previous one.
    ConfigChanged,
    /// The new, non-empty snapshot with values masked.
    ConfigApplied(MaskedSnapshot),
    /// A recognized key is present and was put to use.
    SecretInUse(RecognizedKey),
    /// The new snapshot is empty.
    ConfigUnavailable,
}

impl Notice {
    pub(crate) fn log(&self) {
        match self {
            Notice::ConfigUnavailable => tracing::warn!("{}", self),
            _ => tracing::info!("{}", self),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ConfigChanged => f.write_str("Configuration changed!"),
            Notice::ConfigApplied(masked) => write!(f, "New config applied: {}", masked),
            Notice::SecretInUse(key) => f.write_str(key.acknowledgment()),
            Notice::ConfigUnavailable => f.write_str("Config is empty or unavailable"),
        }
    }
}
