//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals > 0)
//! - Reject a log path that would overwrite the watched file
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WatcherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::WatcherConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("secret_path must not be empty")]
    EmptySecretPath,

    #[error("log_path must not be empty")]
    EmptyLogPath,

    #[error("log_path must differ from secret_path")]
    LogPathIsSecretPath,

    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },

    #[error("unknown log level {0:?}, expected one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every violation.
pub fn validate_config(config: &WatcherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.secret_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptySecretPath);
    }
    if config.log_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyLogPath);
    }
    if !config.log_path.as_os_str().is_empty() && config.log_path == config.secret_path {
        errors.push(ValidationError::LogPathIsSecretPath);
    }
    if config.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval {
            field: "poll_interval_secs",
        });
    }
    if config.error_backoff_secs == 0 {
        errors.push(ValidationError::ZeroInterval {
            field: "error_backoff_secs",
        });
    }
    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&WatcherConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let config = WatcherConfig {
            secret_path: PathBuf::new(),
            log_path: PathBuf::new(),
            poll_interval_secs: 0,
            error_backoff_secs: 0,
            log_level: "loud".into(),
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::EmptySecretPath));
        assert!(errors.contains(&ValidationError::EmptyLogPath));
        assert!(errors.contains(&ValidationError::ZeroInterval {
            field: "poll_interval_secs"
        }));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
    }

    #[test]
    fn test_log_path_cannot_clobber_secret() {
        let config = WatcherConfig {
            log_path: PathBuf::from("/tmp/secret.json"),
            secret_path: PathBuf::from("/tmp/secret.json"),
            ..WatcherConfig::default()
        };

        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::LogPathIsSecretPath]
        );
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = WatcherConfig {
            log_level: "WARN".into(),
            ..WatcherConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
