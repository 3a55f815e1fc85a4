//! Errors raised while loading or validating configuration.

use thiserror::Error;

/// Why the application configuration could not be assembled.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `config` crate could not read or deserialize its sources.
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    /// The sources deserialized fine but a value failed a sanity check.
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A single configuration value that failed validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool max_connections exceeds the allowed ceiling (100)")]
    PoolSizeTooLarge,
}
