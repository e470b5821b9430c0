//! Secret file watcher library.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod watcher;

pub use config::WatcherConfig;
pub use lifecycle::Shutdown;
pub use watcher::SecretWatcher;
