//! Conversion of magnitudes between periods.
//!
//! Values are normalized to a monthly equivalent with fixed ratios
//! (30 days and 4.33 weeks per month, 12 months per year) and then scaled
//! to the target period. Only the identity and the MENSAL/ANUAL pair
//! round-trip exactly; DIARIO and SEMANAL round-trips are approximate.
//! Scaling up saturates at `Decimal::MAX`.

use rust_decimal::Decimal;

use super::types::Period;

const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Converts `value` expressed per `from` into the same magnitude per `to`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use finplan_core::period::{convert, Period};
///
/// assert_eq!(convert(dec!(100), Period::Daily, Period::Monthly), dec!(3000));
/// ```
#[must_use]
pub fn convert(value: Decimal, from: Period, to: Period) -> Decimal {
    if from == to {
        return value;
    }
    from_monthly(to_monthly(value, from), to)
}

/// Converts a per-`period` total into its monthly equivalent.
#[must_use]
pub fn monthly_equivalent(total: Decimal, period: Period) -> Decimal {
    convert(total, period, Period::Monthly)
}

fn to_monthly(value: Decimal, from: Period) -> Decimal {
    match from {
        Period::Daily => value.saturating_mul(DAYS_PER_MONTH),
        Period::Weekly => value.saturating_mul(WEEKS_PER_MONTH),
        Period::Monthly => value,
        Period::Annual => value / MONTHS_PER_YEAR,
    }
}

fn from_monthly(monthly: Decimal, to: Period) -> Decimal {
    match to {
        Period::Daily => monthly / DAYS_PER_MONTH,
        Period::Weekly => monthly / WEEKS_PER_MONTH,
        Period::Monthly => monthly,
        Period::Annual => monthly.saturating_mul(MONTHS_PER_YEAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(100), Period::Daily, Period::Monthly, dec!(3000))]
    #[case(dec!(70), Period::Weekly, Period::Monthly, dec!(303.10))]
    #[case(dec!(70), Period::Weekly, Period::Annual, dec!(3637.20))]
    #[case(dec!(1200), Period::Annual, Period::Monthly, dec!(100))]
    #[case(dec!(100), Period::Monthly, Period::Annual, dec!(1200))]
    #[case(dec!(3000), Period::Monthly, Period::Daily, dec!(100))]
    fn test_convert_known_values(
        #[case] value: Decimal,
        #[case] from: Period,
        #[case] to: Period,
        #[case] expected: Decimal,
    ) {
        assert_eq!(convert(value, from, to), expected);
    }

    #[test]
    fn test_weekly_round_trip_is_approximate() {
        let there = convert(dec!(1), Period::Weekly, Period::Daily);
        let back = convert(there, Period::Daily, Period::Weekly);
        assert!((back - dec!(1)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_monthly_equivalent() {
        assert_eq!(monthly_equivalent(dec!(10), Period::Daily), dec!(300));
        assert_eq!(monthly_equivalent(dec!(600), Period::Annual), dec!(50));
        assert_eq!(monthly_equivalent(dec!(42), Period::Monthly), dec!(42));
    }

    #[rstest]
    #[case(Period::Daily, Period::Monthly)]
    #[case(Period::Daily, Period::Annual)]
    #[case(Period::Weekly, Period::Annual)]
    #[case(Period::Monthly, Period::Annual)]
    fn test_convert_saturates_at_max(#[case] from: Period, #[case] to: Period) {
        assert_eq!(convert(Decimal::MAX, from, to), Decimal::MAX);
    }

    fn period_strategy() -> impl Strategy<Value = Period> {
        prop_oneof![
            Just(Period::Daily),
            Just(Period::Weekly),
            Just(Period::Monthly),
            Just(Period::Annual),
        ]
    }

    proptest! {
        /// Converting a value into its own period is the identity.
        #[test]
        fn test_identity_conversion(
            cents in 0i64..1_000_000_000,
            period in period_strategy(),
        ) {
            let value = Decimal::new(cents, 2);
            prop_assert_eq!(convert(value, period, period), value);
        }

        /// MENSAL and ANUAL are exact inverses.
        #[test]
        fn test_monthly_annual_round_trip(cents in 0i64..1_000_000_000) {
            let value = Decimal::new(cents, 2);
            let annual = convert(value, Period::Monthly, Period::Annual);
            prop_assert_eq!(convert(annual, Period::Annual, Period::Monthly), value);
        }
    }
}
