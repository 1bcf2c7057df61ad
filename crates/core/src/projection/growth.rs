//! Future-value arithmetic shared by projections and the portfolio simulator.

use rust_decimal::prelude::*;
use tracing::warn;

/// Returns `(1 + rate)^months`, saturating at `Decimal::MAX` on overflow.
#[must_use]
pub fn growth_factor(rate: Decimal, months: u32) -> Decimal {
    (Decimal::ONE + rate)
        .checked_powi(i64::from(months))
        .unwrap_or_else(|| {
            warn!(%rate, months, "Growth factor overflowed, saturating");
            Decimal::MAX
        })
}

/// Value after `months` of compounding `initial` plus a monthly contribution.
///
/// A zero rate switches to linear accumulation so the annuity term never
/// divides by zero.
#[must_use]
pub fn future_value(initial: Decimal, monthly: Decimal, rate: Decimal, months: u32) -> Decimal {
    if rate.is_zero() {
        return initial.saturating_add(monthly.saturating_mul(Decimal::from(months)));
    }

    let factor = growth_factor(rate, months);
    let principal = initial.saturating_mul(factor);
    let annuity_factor = (factor - Decimal::ONE)
        .checked_div(rate)
        .unwrap_or(Decimal::MAX);
    let annuity = monthly.saturating_mul(annuity_factor);
    principal.saturating_add(annuity)
}
