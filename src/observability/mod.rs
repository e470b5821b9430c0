//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! watcher, lifecycle, config
//!     → tracing events
//!     → logging.rs subscriber
//!         → stdout
//!         → append-only log file
//! ```

pub mod logging;

pub use logging::{init_logging, log_appender, LoggingError};
