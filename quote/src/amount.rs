//! Parsing and formatting of USD amounts in minor units.

use mizu_common::{MinorUnits, CENTS_PER_UNIT};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// What a raw amount string turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParsedAmount {
    /// Empty, non-numeric, NaN or infinite.
    Unparseable,
    /// A number, but zero or negative.
    NonPositive,
    /// A positive number, already converted to minor units.
    Positive(MinorUnits),
}

pub(crate) fn parse_amount(raw: &str) -> ParsedAmount {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedAmount::Unparseable;
    }

    // f64 decides finiteness; Decimal carries the exact value.
    let float = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return ParsedAmount::Unparseable,
    };

    if float <= 0.0 {
        return ParsedAmount::NonPositive;
    }
    if float >= DECIMAL_LIMIT {
        return ParsedAmount::Positive(MinorUnits::MAX);
    }
    // Anything this small still rounds up to a single cent.
    if float < TINY_AMOUNT {
        return ParsedAmount::Positive(1);
    }

    let exact = trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
        .or_else(|| Decimal::from_f64(float));

    match exact {
        Some(major) if major > Decimal::ZERO => ParsedAmount::Positive(major_to_minor_ceil(major)),
        Some(_) => ParsedAmount::Positive(1),
        None => ParsedAmount::Positive(MinorUnits::MAX),
    }
}

/// Magnitude beyond which a `Decimal` cannot hold the value.
const DECIMAL_LIMIT: f64 = 7.9e28;

/// Positive amounts below this are one minor unit after rounding up.
const TINY_AMOUNT: f64 = 1e-6;

/// Parse a decimal USD string into minor units, rounding up.
///
/// Malformed, empty, non-finite and negative input all yield `0`; rejection
/// is left to quote validation. Amounts too large to count in a `u64`
/// saturate.
pub fn parse_amount_to_minor_units(raw: &str) -> MinorUnits {
    match parse_amount(raw) {
        ParsedAmount::Positive(minor) => minor,
        ParsedAmount::Unparseable | ParsedAmount::NonPositive => 0,
    }
}

/// Render minor units with exactly two fraction digits.
pub fn format_minor_units(cents: MinorUnits) -> String {
    format!("{}.{:02}", cents / CENTS_PER_UNIT, cents % CENTS_PER_UNIT)
}

/// `ceil(major * 100)`, clamped to `[0, u64::MAX]`.
pub(crate) fn major_to_minor_ceil(major: Decimal) -> MinorUnits {
    if major <= Decimal::ZERO {
        return 0;
    }
    major
        .checked_mul(Decimal::from(CENTS_PER_UNIT))
        .and_then(|minor| minor.ceil().to_u64())
        .unwrap_or(MinorUnits::MAX)
}

/// Render a major-unit decimal rounded half away from zero to two places.
pub(crate) fn format_major_2dp(major: &Decimal) -> String {
    let mut rounded = major.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
