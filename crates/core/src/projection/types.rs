//! Projection data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Period the configured interest rate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatePeriod {
    /// Rate is per year.
    #[serde(rename = "ANUAL")]
    Annual,
    /// Rate is per month.
    #[serde(rename = "MENSAL")]
    Monthly,
}

/// Unit of the projection term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermUnit {
    /// Term counted in years.
    #[serde(rename = "ANOS")]
    Years,
    /// Term counted in months.
    #[serde(rename = "MESES")]
    Months,
}

/// Inputs of a compound interest projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundParams {
    /// Initial principal.
    pub initial: Decimal,
    /// Interest rate in percent.
    pub rate: Decimal,
    /// Period the rate refers to.
    pub rate_period: RatePeriod,
    /// Length of the projection.
    pub term: u32,
    /// Unit of `term`.
    pub term_unit: TermUnit,
    /// Contribution added at the end of every month.
    pub monthly: Decimal,
}

impl CompoundParams {
    /// Total number of months covered by the projection.
    #[must_use]
    pub const fn total_months(&self) -> u32 {
        match self.term_unit {
            TermUnit::Years => self.term.saturating_mul(12),
            TermUnit::Months => self.term,
        }
    }

    /// Monthly rate as a fraction (e.g. 0.01 for 1%).
    #[must_use]
    pub fn monthly_rate(&self) -> Decimal {
        let fraction = self.rate / Decimal::ONE_HUNDRED;
        match self.rate_period {
            RatePeriod::Annual => fraction / Decimal::from(12),
            RatePeriod::Monthly => fraction,
        }
    }
}

/// One point of a projected series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Month index, starting at 0.
    pub period: u32,
    /// Principal plus contributions with interest.
    pub value: Decimal,
}
