//! Business rule validation for ledger entries.

use rust_decimal::Decimal;

use super::entry::LedgerEntry;
use super::error::LedgerError;

/// Valid month numbers.
pub const MONTH_RANGE: std::ops::RangeInclusive<u32> = 1..=12;
/// Valid week-of-month numbers.
pub const WEEK_RANGE: std::ops::RangeInclusive<u32> = 1..=5;
/// Valid day-of-week numbers, Sunday first.
pub const DAY_OF_WEEK_RANGE: std::ops::RangeInclusive<u32> = 0..=6;

/// Validates an entry before it enters a store.
///
/// # Errors
///
/// Returns an error if the value is negative or a locator is out of range.
pub fn validate_entry(entry: &LedgerEntry) -> Result<(), LedgerError> {
    if entry.value < Decimal::ZERO {
        return Err(LedgerError::NegativeValue(entry.value));
    }

    check_locator("month", entry.month, &MONTH_RANGE)?;
    check_locator("week", entry.week, &WEEK_RANGE)?;
    check_locator("dayOfWeek", entry.day_of_week, &DAY_OF_WEEK_RANGE)?;

    Ok(())
}

/// Validates a month number.
///
/// # Errors
///
/// Returns an error if `month` is not 1-12.
pub fn validate_month(month: u32) -> Result<(), LedgerError> {
    check_locator("month", Some(month), &MONTH_RANGE)
}

fn check_locator(
    field: &'static str,
    value: Option<u32>,
    range: &std::ops::RangeInclusive<u32>,
) -> Result<(), LedgerError> {
    match value {
        Some(value) if !range.contains(&value) => Err(LedgerError::InvalidLocator { field, value }),
        _ => Ok(()),
    }
}
