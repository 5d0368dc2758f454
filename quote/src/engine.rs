//! Quote computation.

use mizu_common::{Currency, MinorUnits};
use mizu_fx::{FeeSchedule, RateTable};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::amount::{major_to_minor_ceil, parse_amount, ParsedAmount};
use crate::config::QuoteConfig;
use crate::conversion::convert_minor_units;
use crate::error::{AmountError, ConfigError};
use crate::fee::compute_fee_minor_units;

/// A priced send amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Payout currency.
    pub currency: Currency,
    /// What the sender pays, in USD cents.
    pub amount_minor_units: MinorUnits,
    /// Fee rate applied.
    pub fee_bps: u32,
    /// Fee in USD cents.
    pub fee_minor_units: MinorUnits,
    /// Amount left to convert, in USD cents.
    pub after_fee_minor_units: MinorUnits,
    /// Payout currency units per 1 USD.
    pub rate: Decimal,
    /// What the recipient gets, in payout-currency minor units.
    pub payout_minor_units: MinorUnits,
}

/// Outcome of quoting one input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteResult {
    /// Nothing usable typed yet. Callers show neither a quote nor an error.
    Empty,
    /// Amount out of bounds.
    Invalid(AmountError),
    /// Quote for a configured currency.
    Valid(Quote),
    /// Quote priced with fallback rate 1 because the currency has no rate.
    UnsupportedCurrency(Quote),
}

impl QuoteResult {
    /// Whether a quote can be shown and submitted.
    pub fn is_valid(&self) -> bool {
        matches!(self, QuoteResult::Valid(_) | QuoteResult::UnsupportedCurrency(_))
    }

    /// The quote, if any.
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            QuoteResult::Valid(quote) | QuoteResult::UnsupportedCurrency(quote) => Some(quote),
            QuoteResult::Empty | QuoteResult::Invalid(_) => None,
        }
    }

    /// The user-facing validation message, if any.
    pub fn error(&self) -> Option<String> {
        match self {
            QuoteResult::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Whether the quote used fallback pricing.
    pub fn is_unsupported_currency(&self) -> bool {
        matches!(self, QuoteResult::UnsupportedCurrency(_))
    }
}

/// Quote `raw_amount` USD for payout in `currency`.
///
/// Tables are trusted as given; [`QuoteEngine`] validates them up front.
/// A currency missing from `rates` is priced at rate 1 and reported as
/// [`QuoteResult::UnsupportedCurrency`]. A currency missing from `fees`
/// pays no fee.
pub fn build_quote(
    raw_amount: &str,
    currency: &Currency,
    min_usd: Decimal,
    max_usd: Decimal,
    fees: &FeeSchedule,
    rates: &RateTable,
) -> QuoteResult {
    let amount = match parse_amount(raw_amount) {
        ParsedAmount::Positive(minor) => minor,
        ParsedAmount::Unparseable | ParsedAmount::NonPositive => return QuoteResult::Empty,
    };

    if amount < major_to_minor_ceil(min_usd) {
        return QuoteResult::Invalid(AmountError::BelowMinimum { min: min_usd });
    }
    if amount > major_to_minor_ceil(max_usd) {
        return QuoteResult::Invalid(AmountError::AboveMaximum { max: max_usd });
    }

    let fee_bps = fees.get(currency).unwrap_or(0);
    let fee = compute_fee_minor_units(amount, fee_bps);
    let after_fee = amount.saturating_sub(fee);

    let (rate, supported) = match rates.get(currency) {
        Some(rate) => (rate, true),
        None => (Decimal::ONE, false),
    };

    let quote = Quote {
        currency: currency.clone(),
        amount_minor_units: amount,
        fee_bps,
        fee_minor_units: fee,
        after_fee_minor_units: after_fee,
        rate,
        payout_minor_units: convert_minor_units(after_fee, rate),
    };

    if supported {
        QuoteResult::Valid(quote)
    } else {
        warn!(currency = %currency, "No FX rate configured, quoting at 1:1");
        QuoteResult::UnsupportedCurrency(quote)
    }
}

/// Quote engine over a validated configuration.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    config: QuoteConfig,
}

impl QuoteEngine {
    /// Create an engine, rejecting invalid bounds, rates or fees.
    pub fn new(config: QuoteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Quote an input state.
    pub fn quote(&self, raw_amount: &str, currency: &Currency) -> QuoteResult {
        let result = build_quote(
            raw_amount,
            currency,
            self.config.min_usd,
            self.config.max_usd,
            &self.config.fees,
            &self.config.rates,
        );

        if let Some(quote) = result.quote() {
            debug!(
                currency = %currency,
                amount = quote.amount_minor_units,
                fee = quote.fee_minor_units,
                payout = quote.payout_minor_units,
                "Quoted"
            );
        }

        result
    }

    /// Build a new engine with a fresh rate table, keeping bounds and fees.
    pub fn with_rates(&self, rates: RateTable) -> Result<Self, ConfigError> {
        Self::new(self.config.clone().with_rates(rates))
    }

    /// Whether `currency` has a configured rate.
    pub fn supports(&self, currency: &Currency) -> bool {
        self.config.rates.contains(currency)
    }

    /// Fee rate charged for `currency`.
    pub fn fee_bps(&self, currency: &Currency) -> u32 {
        self.config.fees.get(currency).unwrap_or(0)
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizu_fx::FxError;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn engine() -> QuoteEngine {
        QuoteEngine::new(QuoteConfig::default()).unwrap()
    }

    fn quote_default(raw: &str, currency: &str) -> QuoteResult {
        engine().quote(raw, &Currency::new(currency))
    }

    #[test]
    fn test_gbp_scenario() {
        let result = quote_default("100.00", "GBP");

        assert!(result.is_valid());
        assert!(result.error().is_none());

        let quote = result.quote().unwrap();
        assert_eq!(quote.amount_minor_units, 10000);
        assert_eq!(quote.fee_bps, 1000);
        assert_eq!(quote.fee_minor_units, 1000);
        assert_eq!(quote.after_fee_minor_units, 9000);
        assert_eq!(quote.rate, dec!(0.78));
        assert_eq!(quote.payout_minor_units, 7020);
    }

    #[test]
    fn test_zar_scenario() {
        let quote = quote_default("100.00", "ZAR").quote().cloned().unwrap();

        assert_eq!(quote.fee_minor_units, 2000);
        assert_eq!(quote.after_fee_minor_units, 8000);
        assert_eq!(quote.payout_minor_units, 144000);
    }

    #[test]
    fn test_usd_has_rate_but_no_fee() {
        let result = quote_default("42.50", "USD");

        assert!(matches!(result, QuoteResult::Valid(_)));
        let quote = result.quote().unwrap();
        assert_eq!(quote.fee_minor_units, 0);
        assert_eq!(quote.payout_minor_units, 4250);
    }

    #[test]
    fn test_empty_states() {
        for raw in ["", "   ", "0", "0.00", "-5", "abc", "NaN", "Infinity"] {
            let result = quote_default(raw, "GBP");
            assert_eq!(result, QuoteResult::Empty, "input {:?}", raw);
            assert!(!result.is_valid());
            assert!(result.error().is_none());
            assert!(result.quote().is_none());
        }
    }

    #[test]
    fn test_boundaries_inclusive() {
        assert!(quote_default("1.00", "GBP").is_valid());
        assert!(quote_default("5000.00", "GBP").is_valid());

        assert_eq!(
            quote_default("0.99", "GBP").error().as_deref(),
            Some("Minimum amount is $1.00.")
        );
        assert_eq!(
            quote_default("5000.01", "GBP").error().as_deref(),
            Some("Maximum amount is $5000.00.")
        );
    }

    #[test]
    fn test_above_maximum_scenario() {
        let result = quote_default("6000.00", "GBP");
        assert_eq!(
            result,
            QuoteResult::Invalid(AmountError::AboveMaximum { max: dec!(5000) })
        );
        assert_eq!(result.error().as_deref(), Some("Maximum amount is $5000.00."));
    }

    #[test]
    fn test_tiny_positive_amount_is_below_minimum() {
        let result = quote_default("0.001", "GBP");
        assert!(matches!(
            result,
            QuoteResult::Invalid(AmountError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn test_rounded_up_amount_crosses_maximum() {
        // 5000.001 rounds up to 500001 cents
        assert!(!quote_default("5000.001", "GBP").is_valid());
    }

    #[test]
    fn test_unknown_currency_fallback() {
        let result = quote_default("100.00", "EUR");

        assert!(result.is_valid());
        assert!(result.is_unsupported_currency());
        assert!(result.error().is_none());

        let quote = result.quote().unwrap();
        assert_eq!(quote.rate, Decimal::ONE);
        assert_eq!(quote.fee_minor_units, 0);
        assert_eq!(quote.amount_minor_units, 10000);
        assert_eq!(quote.after_fee_minor_units, quote.amount_minor_units);
        assert_eq!(quote.payout_minor_units, quote.after_fee_minor_units);
    }

    #[test]
    fn test_fee_without_rate_still_charged() {
        let mut fees = FeeSchedule::new();
        fees.insert(Currency::new("EUR"), 500);

        let result = build_quote(
            "100",
            &Currency::new("EUR"),
            dec!(1),
            dec!(5000),
            &fees,
            &RateTable::new(),
        );

        assert!(result.is_unsupported_currency());
        assert_eq!(result.quote().unwrap().fee_minor_units, 500);
        assert_eq!(result.quote().unwrap().payout_minor_units, 9500);
    }

    #[test]
    fn test_build_quote_custom_bounds() {
        let result = build_quote(
            "2.50",
            &Currency::gbp(),
            dec!(2.5),
            dec!(2.5),
            &FeeSchedule::new(),
            &RateTable::new(),
        );
        assert!(result.is_valid());

        let result = build_quote(
            "2.49",
            &Currency::gbp(),
            dec!(2.5),
            dec!(10),
            &FeeSchedule::new(),
            &RateTable::new(),
        );
        assert_eq!(result.error().as_deref(), Some("Minimum amount is $2.50."));
    }

    #[test]
    fn test_idempotent() {
        let engine = engine();
        for raw in ["", "0.99", "100.00", "6000", "12.341"] {
            assert_eq!(
                engine.quote(raw, &Currency::gbp()),
                engine.quote(raw, &Currency::gbp())
            );
        }
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = QuoteConfig::default();
        config.rates.insert(Currency::zar(), Decimal::ZERO);
        assert!(matches!(
            QuoteEngine::new(config),
            Err(ConfigError::Table(FxError::NonPositiveRate { .. }))
        ));

        let mut config = QuoteConfig::default();
        config.max_usd = dec!(0.5);
        assert!(matches!(
            QuoteEngine::new(config),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_with_rates() {
        let engine = engine();
        let fresh: RateTable = [(Currency::gbp(), dec!(0.74))].into_iter().collect();

        let updated = engine.with_rates(fresh).unwrap();
        assert_eq!(updated.quote("100", &Currency::gbp()).quote().unwrap().rate, dec!(0.74));
        assert!(!updated.supports(&Currency::zar()));
        assert_eq!(updated.fee_bps(&Currency::zar()), 2000);

        let bad: RateTable = [(Currency::gbp(), dec!(-1))].into_iter().collect();
        assert!(engine.with_rates(bad).is_err());
    }

    fn cents_to_raw(cents: u64) -> String {
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    proptest! {
        #[test]
        fn prop_valid_quote_invariants(cents in 100u64..=500_000, currency in prop::sample::select(vec!["GBP", "ZAR", "USD", "EUR"])) {
            let result = quote_default(&cents_to_raw(cents), currency);
            let quote = result.quote().cloned();
            prop_assert!(quote.is_some());
            let quote = quote.unwrap();
            prop_assert_eq!(quote.amount_minor_units, cents);
            prop_assert!(quote.fee_minor_units <= quote.amount_minor_units);
            prop_assert_eq!(quote.after_fee_minor_units + quote.fee_minor_units, quote.amount_minor_units);
        }

        #[test]
        fn prop_payout_monotonic(a in 100u64..=500_000, b in 100u64..=500_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for currency in ["GBP", "ZAR"] {
                let low = quote_default(&cents_to_raw(lo), currency).quote().map(|q| q.payout_minor_units);
                let high = quote_default(&cents_to_raw(hi), currency).quote().map(|q| q.payout_minor_units);
                prop_assert!(low <= high);
            }
        }

        #[test]
        fn prop_sub_cent_input_rounds_up(cents in 100u64..=400_000, extra in 1u64..=9) {
            let raw = format!("{}{}", cents_to_raw(cents), extra);
            prop_assert_eq!(crate::parse_amount_to_minor_units(&raw), cents + 1);
        }
    }
}
