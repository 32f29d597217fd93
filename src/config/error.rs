//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("External host must start with http:// or https://")]
    InvalidExternalHost,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Google OAuth scopes must not be empty")]
    NoScopes,

    #[error("Auth state path must not be empty")]
    InvalidAuthStatePath,
}
