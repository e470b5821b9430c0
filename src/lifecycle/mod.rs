//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Init logging → Start watcher loop
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → shutdown.rs trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → watcher loop logs and exits → process exits 0
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
