//! Basis-point fee calculation.

use mizu_common::{MinorUnits, BPS_DENOMINATOR};

/// `ceil(amount * fee_bps / 10000)`, never under-charging.
///
/// A schedule above 10000 bps can charge more than the amount itself; the
/// engine refuses such schedules at construction.
pub fn compute_fee_minor_units(amount: MinorUnits, fee_bps: u32) -> MinorUnits {
    let numerator = u128::from(amount) * u128::from(fee_bps);
    let denominator = u128::from(BPS_DENOMINATOR);
    let fee = numerator.div_ceil(denominator);
    MinorUnits::try_from(fee).unwrap_or(MinorUnits::MAX)
}

/// Fee rate as a percentage label, e.g. `1000` -> `"10.00%"`.
pub fn fee_percent_label(fee_bps: u32) -> String {
    format!("{}.{:02}%", fee_bps / 100, fee_bps % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fee_examples() {
        assert_eq!(compute_fee_minor_units(10000, 1000), 1000);
        assert_eq!(compute_fee_minor_units(10000, 2000), 2000);
        assert_eq!(compute_fee_minor_units(100, 0), 0);
        assert_eq!(compute_fee_minor_units(0, 2000), 0);
    }

    #[test]
    fn test_fee_rounds_up() {
        // 1.5 cents of fee is charged as 2
        assert_eq!(compute_fee_minor_units(15, 1000), 2);
        // 0.01 cents of fee is still a cent
        assert_eq!(compute_fee_minor_units(1, 1), 1);
        assert_eq!(compute_fee_minor_units(9999, 1000), 1000);
    }

    #[test]
    fn test_fee_at_full_rate() {
        assert_eq!(compute_fee_minor_units(123_456, 10_000), 123_456);
    }

    #[test]
    fn test_fee_does_not_overflow() {
        assert_eq!(compute_fee_minor_units(MinorUnits::MAX, 10_000), MinorUnits::MAX);
        assert_eq!(compute_fee_minor_units(MinorUnits::MAX, u32::MAX), MinorUnits::MAX);
    }

    #[test]
    fn test_fee_percent_label() {
        assert_eq!(fee_percent_label(1000), "10.00%");
        assert_eq!(fee_percent_label(2000), "20.00%");
        assert_eq!(fee_percent_label(0), "0.00%");
        assert_eq!(fee_percent_label(125), "1.25%");
        assert_eq!(fee_percent_label(5), "0.05%");
    }

    proptest! {
        #[test]
        fn prop_fee_bounded_by_amount(amount in 0u64..=1_000_000_000_000, bps in 0u32..=10_000) {
            let fee = compute_fee_minor_units(amount, bps);
            prop_assert!(fee <= amount);
        }

        #[test]
        fn prop_fee_never_undercharges(amount in 0u64..=1_000_000_000_000, bps in 0u32..=10_000) {
            let fee = compute_fee_minor_units(amount, bps);
            let exact = u128::from(amount) * u128::from(bps);
            prop_assert!(u128::from(fee) * 10_000 >= exact);
            prop_assert!(u128::from(fee) * 10_000 < exact + 10_000);
        }
    }
}
