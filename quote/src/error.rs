//! Quote engine error types.

use mizu_fx::FxError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::amount::format_major_2dp;

/// Why an amount cannot be quoted. The Display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Amount is below the minimum send amount.
    #[error("Minimum amount is ${}.", format_major_2dp(.min))]
    BelowMinimum { min: Decimal },

    /// Amount is above the maximum send amount.
    #[error("Maximum amount is ${}.", format_major_2dp(.max))]
    AboveMaximum { max: Decimal },
}

/// Errors raised while loading or validating engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Minimum send amount is zero or negative.
    #[error("Minimum amount must be positive, got {0}")]
    NonPositiveMinimum(Decimal),

    /// Minimum send amount exceeds the maximum.
    #[error("Minimum amount {min} exceeds maximum amount {max}")]
    InvalidBounds { min: Decimal, max: Decimal },

    /// Rate table or fee schedule failed validation.
    #[error(transparent)]
    Table(#[from] FxError),

    /// Configuration document could not be parsed.
    #[error("Invalid configuration document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_error_messages() {
        assert_eq!(
            AmountError::BelowMinimum { min: dec!(1) }.to_string(),
            "Minimum amount is $1.00."
        );
        assert_eq!(
            AmountError::AboveMaximum { max: dec!(5000) }.to_string(),
            "Maximum amount is $5000.00."
        );
        assert_eq!(
            AmountError::AboveMaximum { max: dec!(250.5) }.to_string(),
            "Maximum amount is $250.50."
        );
    }
}
