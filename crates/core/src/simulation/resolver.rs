//! Effective monthly return rate of a position.

use chrono::NaiveDate;
use rust_decimal::prelude::*;

use super::error::SimulationError;
use super::jitter::JitterSource;
use super::rates::BenchmarkRates;
use super::types::{AssetClass, InvestmentPosition, MonthlyRate, ReturnModel};

/// Average month length used to count months until maturity.
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

/// Resolves the monthly rate of a position at a simulated month.
#[derive(Debug, Clone, Copy)]
pub struct ReturnRateResolver {
    benchmarks: BenchmarkRates,
    as_of: NaiveDate,
}

impl ReturnRateResolver {
    /// Creates a resolver for simulations starting at `as_of`.
    #[must_use]
    pub const fn new(benchmarks: BenchmarkRates, as_of: NaiveDate) -> Self {
        Self { benchmarks, as_of }
    }

    /// Whole months between the simulation start and `maturity`.
    ///
    /// Negative when the maturity date is already in the past.
    #[must_use]
    pub fn months_until_maturity(&self, maturity: NaiveDate) -> i64 {
        let days = (maturity - self.as_of).num_days();
        (Decimal::from(days) / DAYS_PER_MONTH)
            .floor()
            .to_i64()
            .unwrap_or_default()
    }

    /// Monthly rate of the return model, before jitter.
    pub fn base_rate(&self, position: &InvestmentPosition) -> Result<Decimal, SimulationError> {
        let twelve = Decimal::from(12);
        let rate = match position.return_model {
            ReturnModel::Fixed { fixed_rate_annual } => {
                fixed_rate_annual / twelve / Decimal::ONE_HUNDRED
            }
            ReturnModel::Indexed {
                indexer,
                indexer_percent,
            } => {
                if position.asset_class != AssetClass::FixedIncome {
                    return Err(SimulationError::IndexedRequiresFixedIncome(position.id));
                }
                self.benchmarks.monthly_fraction(indexer, indexer_percent)
            }
            ReturnModel::FixedPlusIndexed {
                fixed_rate_annual,
                indexer,
                indexer_percent,
            } => {
                fixed_rate_annual / twelve / Decimal::ONE_HUNDRED
                    + self.benchmarks.monthly_fraction(indexer, indexer_percent)
            }
            ReturnModel::Flat {
                rate,
                rate_is_monthly,
            } => {
                if rate_is_monthly {
                    rate / Decimal::ONE_HUNDRED
                } else {
                    rate / twelve / Decimal::ONE_HUNDRED
                }
            }
        };

        if rate < -Decimal::ONE {
            return Err(SimulationError::RateBelowTotalLoss(position.id));
        }
        Ok(rate)
    }

    /// Resolves the rate, maturity state and accruing months at `simulated_month`.
    ///
    /// When `volatility_percent` is set, crypto positions get a symmetric
    /// jitter of up to that many percent added to their rate.
    pub fn resolve(
        &self,
        position: &InvestmentPosition,
        simulated_month: u32,
        volatility_percent: Option<Decimal>,
        jitter: &mut dyn JitterSource,
    ) -> Result<MonthlyRate, SimulationError> {
        validate(position)?;

        let mut rate = self.base_rate(position)?;
        if let Some(volatility) = volatility_percent {
            if position.asset_class == AssetClass::Crypto {
                rate += jitter.symmetric_unit() * volatility / Decimal::ONE_HUNDRED;
                rate = rate.max(-Decimal::ONE);
            }
        }

        let (expired, effective_months) = match position.maturity_date {
            Some(maturity) => {
                let months_until = self.months_until_maturity(maturity);
                if i64::from(simulated_month) > months_until {
                    let frozen = u32::try_from(months_until.max(0)).unwrap_or(u32::MAX);
                    (true, frozen)
                } else {
                    (false, simulated_month)
                }
            }
            None => (false, simulated_month),
        };

        Ok(MonthlyRate {
            rate,
            expired,
            effective_months,
        })
    }
}

fn validate(position: &InvestmentPosition) -> Result<(), SimulationError> {
    if position.initial_value < Decimal::ZERO {
        return Err(SimulationError::NegativeInitialValue(position.id));
    }
    if position.monthly_contribution < Decimal::ZERO {
        return Err(SimulationError::NegativeContribution(position.id));
    }
    if position.tax_rate_percent < Decimal::ZERO || position.tax_rate_percent > Decimal::ONE_HUNDRED
    {
        return Err(SimulationError::InvalidTaxRate {
            position: position.id,
            rate: position.tax_rate_percent,
        });
    }
    Ok(())
}
