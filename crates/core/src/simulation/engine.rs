//! Month-by-month portfolio simulation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use finplan_shared::config::SimulationConfig;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use super::jitter::{JitterSource, SeededJitter};
use super::rates::BenchmarkRates;
use super::resolver::ReturnRateResolver;
use super::types::{
    AssetClassTotals, InvestmentPosition, MonthlyRate, PortfolioReport, PortfolioRequest,
    PositionIssue, PositionValue, SimulationMonthSnapshot, SimulationOutcome,
};
use crate::projection::future_value;

/// Decimal places kept in simulation output.
const OUTPUT_DP: u32 = 4;

/// Simulates a multi-asset portfolio month by month.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioSimulator {
    benchmarks: BenchmarkRates,
}

impl PortfolioSimulator {
    /// Creates a simulator with the given benchmark table.
    #[must_use]
    pub const fn new(benchmarks: BenchmarkRates) -> Self {
        Self { benchmarks }
    }

    /// Creates a simulator from configuration.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(BenchmarkRates::new(config.benchmarks))
    }

    /// Runs a simulation, drawing crypto jitter from the request seed.
    ///
    /// Without a seed the jitter is seeded by the OS and the report is not
    /// reproducible.
    #[must_use]
    pub fn run(&self, request: &PortfolioRequest) -> PortfolioReport {
        let mut jitter = match request.seed {
            Some(seed) => SeededJitter::new(seed),
            None => SeededJitter::from_os(),
        };
        let outcome = self.simulate(request, &mut jitter);

        PortfolioReport {
            simulation_id: Uuid::now_v7(),
            parameters_hash: Self::hash_params(request),
            outcome,
            cached: false,
        }
    }

    /// Simulates months `0..=request.months` with an explicit jitter source.
    ///
    /// A position the resolver rejects contributes zero to every month and is
    /// reported once in `issues`; the rest of the portfolio is still simulated.
    pub fn simulate(
        &self,
        request: &PortfolioRequest,
        jitter: &mut dyn JitterSource,
    ) -> SimulationOutcome {
        debug!(
            positions = request.positions.len(),
            months = request.months,
            volatility = request.include_crypto_volatility,
            "Running portfolio simulation"
        );

        let resolver = ReturnRateResolver::new(self.benchmarks, request.as_of);
        let volatility = request.include_crypto_volatility.then(|| {
            let clamped = request
                .volatility_percent
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            if clamped != request.volatility_percent {
                warn!(
                    requested = %request.volatility_percent,
                    applied = %clamped,
                    "Volatility out of range, clamped"
                );
            }
            clamped
        });

        let capacity = usize::try_from(request.months).map_or(0, |m| m.saturating_add(1));
        let mut snapshots = Vec::with_capacity(capacity);
        let mut final_positions = Vec::new();
        let mut issues: Vec<PositionIssue> = Vec::new();

        for month in 0..=request.months {
            let is_last = month == request.months;
            let mut totals = MonthTotals::default();

            for position in &request.positions {
                match resolver.resolve(position, month, volatility, jitter) {
                    Ok(rate) => {
                        let value = Self::position_value(position, rate);
                        totals.add(position, &value);
                        if is_last {
                            final_positions.push(value.rounded());
                        }
                    }
                    Err(err) => {
                        if !issues.iter().any(|i| i.position_id == position.id) {
                            warn!(
                                position_id = %position.id,
                                month,
                                error = %err,
                                "Skipping malformed position"
                            );
                            issues.push(PositionIssue {
                                position_id: position.id,
                                first_month: month,
                                reason: err.to_string(),
                            });
                        }
                    }
                }
            }

            snapshots.push(totals.into_snapshot(month));
        }

        SimulationOutcome {
            snapshots,
            final_positions,
            issues,
        }
    }

    /// Values one position given its resolved rate.
    ///
    /// Growth accrues only for `effective_months`, so a matured position stays
    /// at its maturity value.
    #[must_use]
    pub fn position_value(position: &InvestmentPosition, rate: MonthlyRate) -> PositionValue {
        let months = rate.effective_months;
        let value = if months > 0 {
            future_value(
                position.initial_value,
                position.monthly_contribution,
                rate.rate,
                months,
            )
        } else {
            position.initial_value
        };

        let contribution_to_date = position.initial_value.saturating_add(
            position
                .monthly_contribution
                .saturating_mul(Decimal::from(months)),
        );
        let profit = value.saturating_sub(contribution_to_date);
        let tax = if profit > Decimal::ZERO {
            profit.saturating_mul(position.tax_rate_percent / Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        PositionValue {
            position_id: position.id,
            value,
            contribution_to_date,
            profit,
            tax,
            expired: rate.expired,
        }
    }

    /// Stable hash of a request, used as the cache key.
    #[must_use]
    pub fn hash_params(request: &PortfolioRequest) -> String {
        let mut hasher = DefaultHasher::new();
        request.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

impl PositionValue {
    fn rounded(self) -> Self {
        Self {
            value: self.value.round_dp(OUTPUT_DP),
            contribution_to_date: self.contribution_to_date.round_dp(OUTPUT_DP),
            profit: self.profit.round_dp(OUTPUT_DP),
            tax: self.tax.round_dp(OUTPUT_DP),
            ..self
        }
    }
}

#[derive(Default)]
struct MonthTotals {
    value: Decimal,
    contribution: Decimal,
    profit: Decimal,
    tax: Decimal,
    by_asset_class: AssetClassTotals,
}

impl MonthTotals {
    fn add(&mut self, position: &InvestmentPosition, value: &PositionValue) {
        self.value = self.value.saturating_add(value.value);
        self.contribution = self.contribution.saturating_add(value.contribution_to_date);
        self.profit = self.profit.saturating_add(value.profit);
        self.tax = self.tax.saturating_add(value.tax);
        self.by_asset_class.add(position.asset_class, value.value);
    }

    fn into_snapshot(self, month: u32) -> SimulationMonthSnapshot {
        let total_profit = self.profit.round_dp(OUTPUT_DP);
        let total_tax = self.tax.round_dp(OUTPUT_DP);
        SimulationMonthSnapshot {
            month,
            total_value: self.value.round_dp(OUTPUT_DP),
            total_contribution: self.contribution.round_dp(OUTPUT_DP),
            total_profit,
            total_tax,
            net_profit: total_profit.saturating_sub(total_tax),
            by_asset_class: self.by_asset_class.round_dp(OUTPUT_DP),
        }
    }
}
