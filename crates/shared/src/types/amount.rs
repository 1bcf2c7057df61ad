//! Lenient parsing of user-entered amounts.
//!
//! CRITICAL: parsing is total. Input that is not a non-negative decimal after
//! locale normalization becomes zero, so downstream calculations never fail on
//! bad input. Callers that need to tell "0" from "garbage" must validate first.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a non-negative decimal amount, coercing invalid input to zero.
///
/// Accepts both `1234.56` and the comma-decimal form `1.234,56`. When a comma
/// is present, dots are treated as thousands separators. A leading `R$`
/// currency marker and surrounding whitespace are ignored.
#[must_use]
pub fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed);
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

    let normalized = if compact.contains(',') {
        compact.replace('.', "").replace(',', ".")
    } else {
        compact
    };

    match Decimal::from_str(&normalized) {
        Ok(value) if !value.is_sign_negative() => value,
        _ => Decimal::ZERO,
    }
}
