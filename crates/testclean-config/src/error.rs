//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Load error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),
}
