//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WatcherConfig (validated, immutable)
//!     → handed to logging init and the watcher loop
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the watched secret file is the only
//!   thing that changes at runtime
//! - All fields have defaults so running without a file matches the
//!   stock agent layout under /opt/vault-agent
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::WatcherConfig;
pub use validation::ValidationError;
