//! USD to payout-currency conversion in minor units.

use mizu_common::{MinorUnits, CENTS_PER_UNIT};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Convert USD minor units into payout minor units at `rate`, rounding up.
///
/// Computes `ceil((amount / 100) * rate * 100)` in exact decimal
/// arithmetic. `rate` must be positive; a non-positive rate yields `0`
/// rather than a meaningful payout. Results beyond `u64` saturate.
pub fn convert_minor_units(amount: MinorUnits, rate: Decimal) -> MinorUnits {
    let cents = Decimal::from(CENTS_PER_UNIT);
    let converted = Decimal::from(amount)
        .checked_div(cents)
        .and_then(|major| major.checked_mul(rate))
        .and_then(|payout_major| payout_major.checked_mul(cents));

    match converted {
        Some(minor) if minor <= Decimal::ZERO => 0,
        Some(minor) => minor.ceil().to_u64().unwrap_or(MinorUnits::MAX),
        None => MinorUnits::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_examples() {
        assert_eq!(convert_minor_units(9000, dec!(0.78)), 7020);
        assert_eq!(convert_minor_units(8000, dec!(18.0)), 144000);
        assert_eq!(convert_minor_units(12345, dec!(1)), 12345);
        assert_eq!(convert_minor_units(0, dec!(0.78)), 0);
    }

    #[test]
    fn test_convert_rounds_up() {
        // 0.01 USD at 0.78 is 0.78 cents, paid as 1
        assert_eq!(convert_minor_units(1, dec!(0.78)), 1);
        // 1.23 USD at 0.7777 is 95.6571 cents
        assert_eq!(convert_minor_units(123, dec!(0.7777)), 96);
    }

    #[test]
    fn test_convert_non_positive_rate() {
        assert_eq!(convert_minor_units(10000, Decimal::ZERO), 0);
        assert_eq!(convert_minor_units(10000, dec!(-1)), 0);
    }

    #[test]
    fn test_convert_saturates() {
        assert_eq!(convert_minor_units(MinorUnits::MAX, dec!(18)), MinorUnits::MAX);
    }

    proptest! {
        #[test]
        fn prop_convert_monotonic(
            a in 0u64..=100_000_000,
            b in 0u64..=100_000_000,
            rate_milli in 1u32..=100_000,
        ) {
            let rate = Decimal::new(i64::from(rate_milli), 3);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(convert_minor_units(lo, rate) <= convert_minor_units(hi, rate));
        }
    }
}
