//! Monetary types and minor-unit constants.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommonError;

/// A count of minor units (cents for USD).
pub type MinorUnits = u64;

/// Minor units per major unit for every currency quoted by MizuCash.
pub const CENTS_PER_UNIT: u64 = 100;

/// Basis points in one whole (100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// ISO 4217 style currency code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a new currency from code, normalised to uppercase.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    /// Parse a currency code, rejecting anything that is not three ASCII letters.
    pub fn parse(code: &str) -> Result<Self, CommonError> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CommonError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self::new(trimmed))
    }

    /// Get the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Common currencies
    pub fn usd() -> Self {
        Self::new("USD")
    }

    pub fn gbp() -> Self {
        Self::new("GBP")
    }

    pub fn zar() -> Self {
        Self::new("ZAR")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromStr for Currency {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CommonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// Format a balance with grouped thousands and two to three fraction digits.
///
/// `1842.75` renders as `"1,842.75"`, `1000000` as `"1,000,000.00"`.
pub fn format_balance(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), fraction.to_string()),
        None => (text, String::new()),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut fraction = fraction;
    while fraction.len() < 2 {
        fraction.push('0');
    }

    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_normalised() {
        assert_eq!(Currency::new("gbp"), Currency::gbp());
        assert_eq!(Currency::from(" zar "), Currency::zar());
        assert_eq!(Currency::usd().code(), "USD");
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!(Currency::parse("gbp").unwrap(), Currency::gbp());
        assert!(Currency::parse("").is_err());
        assert!(Currency::parse("GB").is_err());
        assert!(Currency::parse("G8P").is_err());
        assert!("EURO".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_serde() {
        let json = serde_json::to_string(&Currency::gbp()).unwrap();
        assert_eq!(json, "\"GBP\"");

        let parsed: Currency = serde_json::from_str("\"zar\"").unwrap();
        assert_eq!(parsed, Currency::zar());

        assert!(serde_json::from_str::<Currency>("\"POUNDS\"").is_err());
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(dec!(1842.75)), "1,842.75");
        assert_eq!(format_balance(dec!(0)), "0.00");
        assert_eq!(format_balance(dec!(1000000)), "1,000,000.00");
        assert_eq!(format_balance(dec!(999.5)), "999.50");
        assert_eq!(format_balance(dec!(12.3456)), "12.346");
        assert_eq!(format_balance(dec!(-1234.5)), "-1,234.50");
    }
}
