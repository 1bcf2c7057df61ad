//! Financial independence projection.
//!
//! Independence is reached once invested savings, withdrawn at the safe
//! withdrawal rate, cover annual living expenses:
//! `target = monthly_expenses * 12 / (swr / 100)`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProjectionError;
use super::series::{CompoundSeries, VALUE_DP};
use super::types::{CompoundParams, RatePeriod, SeriesPoint, TermUnit};

/// Inputs of a financial independence projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiPlan {
    /// Savings already invested.
    pub current_savings: Decimal,
    /// Amount invested every month.
    pub monthly_contribution: Decimal,
    /// Living expenses per month.
    pub monthly_expenses: Decimal,
    /// Expected annual return in percent.
    pub annual_return: Decimal,
    /// Safe withdrawal rate in percent per year.
    #[serde(default = "default_withdrawal_rate")]
    pub safe_withdrawal_rate: Decimal,
    /// Years to project.
    pub horizon_years: u32,
}

fn default_withdrawal_rate() -> Decimal {
    FiPlan::DEFAULT_WITHDRAWAL_RATE
}

impl FiPlan {
    /// The classic four percent rule.
    pub const DEFAULT_WITHDRAWAL_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

    /// Capital whose safe withdrawals cover annual expenses.
    pub fn target_capital(&self) -> Result<Decimal, ProjectionError> {
        if self.safe_withdrawal_rate <= Decimal::ZERO {
            return Err(ProjectionError::ZeroWithdrawalRate);
        }
        let annual_expenses = self.monthly_expenses.saturating_mul(Decimal::from(12));
        let target = annual_expenses
            .checked_div(self.safe_withdrawal_rate / Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::MAX);
        Ok(target.round_dp(VALUE_DP))
    }

    fn compound_params(&self) -> CompoundParams {
        CompoundParams {
            initial: self.current_savings,
            rate: self.annual_return,
            rate_period: RatePeriod::Annual,
            term: self.horizon_years,
            term_unit: TermUnit::Years,
            monthly: self.monthly_contribution,
        }
    }
}

/// Result of a financial independence projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiProjection {
    /// Capital required for independence.
    pub target_capital: Decimal,
    /// First month whose projected value reaches the target, if any.
    pub months_to_independence: Option<u32>,
    /// Projected value at the end of the horizon.
    pub final_value: Decimal,
    /// Monthly income the final value supports at the safe withdrawal rate.
    pub passive_monthly_income: Decimal,
    /// Month-by-month projected savings.
    pub series: Vec<SeriesPoint>,
}

/// Projects savings growth and finds when independence is reached.
pub fn project(plan: &FiPlan) -> Result<FiProjection, ProjectionError> {
    if plan.horizon_years == 0 {
        return Err(ProjectionError::EmptyHorizon);
    }
    let target_capital = plan.target_capital()?;

    let series: Vec<SeriesPoint> = CompoundSeries::new(&plan.compound_params()).collect();
    let months_to_independence = series
        .iter()
        .find(|point| point.value >= target_capital)
        .map(|point| point.period);
    let final_value = series.last().map_or(plan.current_savings, |point| point.value);

    let passive_monthly_income = (final_value
        .saturating_mul(plan.safe_withdrawal_rate / Decimal::ONE_HUNDRED)
        / Decimal::from(12))
    .round_dp(VALUE_DP);

    Ok(FiProjection {
        target_capital,
        months_to_independence,
        final_value,
        passive_monthly_income,
        series,
    })
}
