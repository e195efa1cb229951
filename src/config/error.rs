//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Storage data directory must be set for the file backend")]
    MissingDataDir,

    #[error("Catalog base URL must be an http(s) URL")]
    InvalidCatalogUrl,

    #[error("Invalid catalog fetch timeout")]
    InvalidCatalogTimeout,
}
