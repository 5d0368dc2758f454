//! Quote engine configuration.

use mizu_common::Currency;
use mizu_fx::{FeeSchedule, RateTable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bounds and pricing tables for quoting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Minimum send amount in USD.
    pub min_usd: Decimal,
    /// Maximum send amount in USD.
    pub max_usd: Decimal,
    /// Payout currency units per 1 USD.
    pub rates: RateTable,
    /// Fee in basis points per payout currency.
    pub fees: FeeSchedule,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            min_usd: Decimal::ONE,
            max_usd: Decimal::from(5000),
            rates: default_rates(),
            fees: default_fees(),
        }
    }
}

/// `{USD: 1, GBP: 0.78, ZAR: 18.0}`
pub fn default_rates() -> RateTable {
    [
        (Currency::usd(), Decimal::ONE),
        (Currency::gbp(), Decimal::new(78, 2)),
        (Currency::zar(), Decimal::new(180, 1)),
    ]
    .into_iter()
    .collect()
}

/// `{GBP: 1000, ZAR: 2000}` (10% and 20%)
pub fn default_fees() -> FeeSchedule {
    [(Currency::gbp(), 1000), (Currency::zar(), 2000)]
        .into_iter()
        .collect()
}

impl QuoteConfig {
    /// Load bounds from environment variables on top of the defaults.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `QUOTE_MIN_USD` and `QUOTE_MAX_USD` when set. Unparsable values
    /// are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(min) = std::env::var("QUOTE_MIN_USD") {
            if let Ok(min) = min.trim().parse() {
                self.min_usd = min;
            }
        }

        if let Ok(max) = std::env::var("QUOTE_MAX_USD") {
            if let Ok(max) = max.trim().parse() {
                self.max_usd = max;
            }
        }

        self
    }

    /// Parse a JSON configuration document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the rate table, e.g. with a fresh feed snapshot.
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_usd <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveMinimum(self.min_usd));
        }

        if self.min_usd > self.max_usd {
            return Err(ConfigError::InvalidBounds {
                min: self.min_usd,
                max: self.max_usd,
            });
        }

        self.rates.validate()?;
        self.fees.validate()?;

        Ok(())
    }
}
