//! Portal error types.

use mizu_fx::FxError;
use mizu_quote::ConfigError;
use thiserror::Error;

/// Errors from portal setup and rate refresh.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Quote configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rates could not be fetched.
    #[error("Rate refresh failed: {0}")]
    Rates(#[from] FxError),
}

/// Result type alias for portal operations.
pub type Result<T> = std::result::Result<T, PortalError>;
