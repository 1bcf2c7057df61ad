//! Compound interest series generation.

use rust_decimal::Decimal;

use super::growth::future_value;
use super::types::{CompoundParams, SeriesPoint};

/// Decimal places kept in projected values.
pub(crate) const VALUE_DP: u32 = 4;

/// Restartable iterator over a compound growth series.
///
/// Yields one point per month from month 0 through the last month of the
/// term inclusive. Deterministic: two iterations over the same params
/// produce identical points.
#[derive(Debug, Clone)]
pub struct CompoundSeries {
    initial: Decimal,
    monthly: Decimal,
    rate: Decimal,
    total_months: u32,
    cursor: u64,
}

impl CompoundSeries {
    /// Creates a series positioned at month 0.
    #[must_use]
    pub fn new(params: &CompoundParams) -> Self {
        Self {
            initial: params.initial,
            monthly: params.monthly,
            rate: params.monthly_rate(),
            total_months: params.total_months(),
            cursor: 0,
        }
    }

    /// Rewinds the series back to month 0.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Returns the value for a given month without advancing the iterator.
    #[must_use]
    pub fn value_at(&self, month: u32) -> Decimal {
        future_value(self.initial, self.monthly, self.rate, month).round_dp(VALUE_DP)
    }

    fn remaining(&self) -> u64 {
        (u64::from(self.total_months) + 1).saturating_sub(self.cursor)
    }
}

impl Iterator for CompoundSeries {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor > u64::from(self.total_months) {
            return None;
        }
        let period = u32::try_from(self.cursor).ok()?;
        self.cursor += 1;

        Some(SeriesPoint {
            period,
            value: self.value_at(period),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CompoundSeries {}

/// Generates the full month-indexed series for a projection.
#[must_use]
pub fn generate(params: &CompoundParams) -> Vec<SeriesPoint> {
    CompoundSeries::new(params).collect()
}
