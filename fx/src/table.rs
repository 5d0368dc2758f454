//! Rate tables and fee schedules keyed by currency.

use std::collections::BTreeMap;

use mizu_common::{Currency, BPS_DENOMINATOR};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FxError, FxResult};

/// Highest fee a schedule may charge (100%).
pub const MAX_FEE_BPS: u32 = BPS_DENOMINATOR as u32;

/// Destination-currency units per 1 USD, keyed by destination currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<Currency, Decimal>);

impl RateTable {
    /// Create an empty rate table.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Get the rate for a currency.
    pub fn get(&self, currency: &Currency) -> Option<Decimal> {
        self.0.get(currency).copied()
    }

    /// Set the rate for a currency, returning the previous one.
    pub fn insert(&mut self, currency: Currency, rate: Decimal) -> Option<Decimal> {
        self.0.insert(currency, rate)
    }

    /// Check whether the table quotes a currency.
    pub fn contains(&self, currency: &Currency) -> bool {
        self.0.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(currency, rate)` in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&Currency, &Decimal)> {
        self.0.iter()
    }

    /// Reject zero and negative rates.
    pub fn validate(&self) -> FxResult<()> {
        for (currency, rate) in &self.0 {
            if *rate <= Decimal::ZERO {
                return Err(FxError::NonPositiveRate {
                    currency: currency.clone(),
                    rate: *rate,
                });
            }
        }
        Ok(())
    }

    /// Parse the rate feed format: a JSON array of single-entry objects,
    /// e.g. `[{"USD": 1}, {"GBP": 0.74}]`.
    ///
    /// Later entries for the same currency replace earlier ones. Empty
    /// objects are skipped. The result is not validated.
    pub fn from_feed(json: &str) -> FxResult<Self> {
        let items: Vec<Value> = serde_json::from_str(json)?;
        let mut table = Self::new();

        for (index, item) in items.iter().enumerate() {
            let object = item.as_object().ok_or_else(|| {
                FxError::MalformedFeed(format!("item {} is not an object", index))
            })?;

            let Some((code, value)) = object.iter().next() else {
                continue;
            };

            let currency = Currency::parse(code)
                .map_err(|e| FxError::MalformedFeed(format!("item {}: {}", index, e)))?;
            let rate = decimal_from_json(value).ok_or_else(|| {
                FxError::MalformedFeed(format!("item {}: rate for {} is not a number", index, code))
            })?;

            table.insert(currency, rate);
        }

        Ok(table)
    }
}

impl FromIterator<(Currency, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (Currency, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fee in basis points charged for payouts in each currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeSchedule(BTreeMap<Currency, u32>);

impl FeeSchedule {
    /// Create an empty fee schedule.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Get the fee for a currency.
    pub fn get(&self, currency: &Currency) -> Option<u32> {
        self.0.get(currency).copied()
    }

    /// Set the fee for a currency, returning the previous one.
    pub fn insert(&mut self, currency: Currency, bps: u32) -> Option<u32> {
        self.0.insert(currency, bps)
    }

    pub fn contains(&self, currency: &Currency) -> bool {
        self.0.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Currency, &u32)> {
        self.0.iter()
    }

    /// Reject fees above [`MAX_FEE_BPS`].
    pub fn validate(&self) -> FxResult<()> {
        for (currency, bps) in &self.0 {
            if *bps > MAX_FEE_BPS {
                return Err(FxError::FeeOutOfRange {
                    currency: currency.clone(),
                    bps: *bps,
                    max_bps: MAX_FEE_BPS,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(Currency, u32)> for FeeSchedule {
    fn from_iter<I: IntoIterator<Item = (Currency, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn decimal_from_json(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse::<Decimal>().ok().or_else(|| {
            Decimal::from_scientific(&n.to_string()).ok()
        }),
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}
