//! Secret file watcher subsystem.
//!
//! # Data Flow
//! ```text
//! every poll interval:
//!     snapshot.rs (read + decode secret file, failures → empty snapshot)
//!     → poller.rs (compare with previous snapshot)
//!     → masking.rs (redact values, pick out recognized keys)
//!     → Notice events logged to console + log file
//!
//! on unexpected error:
//!     poller.rs logs it and waits the longer error backoff
//! ```
//!
//! # Design Decisions
//! - The watcher never writes to the secret file
//! - The previous snapshot lives in the watcher, not in a global
//! - Absent and malformed files look the same to the loop (empty snapshot)

pub mod masking;
pub mod poller;
pub mod snapshot;
pub mod types;

pub use masking::{mask_value, MaskedSnapshot, RecognizedKey, REDACTED};
pub use poller::{SecretWatcher, WatchStats};
pub use snapshot::{load_snapshot, read_config, Snapshot, SnapshotError};
pub use types::{Notice, WatchError};
