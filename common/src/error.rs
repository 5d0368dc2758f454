//! Error types shared across MizuCash crates.

use thiserror::Error;

/// Errors raised by the common types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),
}
