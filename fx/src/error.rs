//! FX error types.

use mizu_common::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while loading or validating rates and fees.
#[derive(Debug, Error)]
pub enum FxError {
    /// A rate table entry is zero or negative.
    #[error("Rate for {currency} must be positive, got {rate}")]
    NonPositiveRate { currency: Currency, rate: Decimal },

    /// A fee schedule entry exceeds 100%.
    #[error("Fee for {currency} is {bps} bps, maximum is {max_bps} bps")]
    FeeOutOfRange {
        currency: Currency,
        bps: u32,
        max_bps: u32,
    },

    /// Rate feed document could not be parsed.
    #[error("Malformed rate feed: {0}")]
    MalformedFeed(String),

    /// Provider returned an error.
    #[error("Rate provider error: {0}")]
    ProviderError(String),

    /// Provider returned no rates at all.
    #[error("No rates available from {0}")]
    NoRatesAvailable(String),

    /// Reading a feed from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        FxError::MalformedFeed(err.to_string())
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
