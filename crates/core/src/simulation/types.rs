//! Simulation data types.

use chrono::NaiveDate;
use finplan_shared::types::PositionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Asset class of an investment position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    /// Cryptocurrency, subject to volatility jitter.
    Crypto,
    /// Listed equity.
    Stock,
    /// Bonds, deposits and other fixed income.
    FixedIncome,
    /// Real estate and real estate funds.
    RealEstate,
}

/// Benchmark a floating-rate position is indexed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Indexer {
    /// Interbank deposit rate.
    Cdi,
    /// Central bank policy rate.
    Selic,
    /// Consumer price index.
    Ipca,
    /// Savings account yield.
    Poupanca,
    /// Reference rate.
    Tr,
    /// General market price index.
    Igpm,
}

/// Risk classification of a position. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

/// How a position earns its return. Rates are in percent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ReturnModel {
    /// Prefixed annual rate.
    Fixed {
        /// Annual rate in percent.
        fixed_rate_annual: Decimal,
    },
    /// A percentage of a benchmark. Fixed income only.
    Indexed {
        /// Benchmark followed.
        indexer: Indexer,
        /// Share of the benchmark earned, in percent (e.g. 110).
        indexer_percent: Decimal,
    },
    /// Prefixed annual rate on top of a percentage of a benchmark.
    FixedPlusIndexed {
        /// Annual spread in percent.
        fixed_rate_annual: Decimal,
        /// Benchmark followed.
        indexer: Indexer,
        /// Share of the benchmark earned, in percent.
        indexer_percent: Decimal,
    },
    /// A flat expected return for variable-income classes.
    Flat {
        /// Expected return in percent.
        rate: Decimal,
        /// Whether `rate` is per month rather than per year.
        #[serde(default)]
        rate_is_monthly: bool,
    },
}

/// A single holding in the portfolio simulator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPosition {
    /// Position ID.
    pub id: PositionId,
    /// Display name.
    pub name: String,
    /// Asset class.
    pub asset_class: AssetClass,
    /// Amount invested at month 0.
    pub initial_value: Decimal,
    /// Amount added every month.
    pub monthly_contribution: Decimal,
    /// Return model.
    pub return_model: ReturnModel,
    /// Risk classification.
    pub risk_level: RiskLevel,
    /// Capital-gains tax applied to profit, in percent.
    pub tax_rate_percent: Decimal,
    /// Date after which the position stops accruing return.
    pub maturity_date: Option<NaiveDate>,
}

/// Parameters for running a portfolio simulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRequest {
    /// Positions to simulate.
    pub positions: Vec<InvestmentPosition>,
    /// Number of months to project; the output has `months + 1` snapshots.
    pub months: u32,
    /// Apply random jitter to crypto returns.
    pub include_crypto_volatility: bool,
    /// Jitter amplitude in percent per month.
    ///
    /// Clamped to `0..=100` when the simulation runs; values outside that
    /// range are logged and treated as the nearest bound.
    pub volatility_percent: Decimal,
    /// Seed for the jitter source. Unseeded runs are not reproducible.
    pub seed: Option<u64>,
    /// Date the simulation starts from.
    pub as_of: NaiveDate,
}

impl PortfolioRequest {
    /// Returns true if two runs of this request produce identical output.
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        self.seed.is_some()
            || !self.include_crypto_volatility
            || !self
                .positions
                .iter()
                .any(|p| p.asset_class == AssetClass::Crypto)
    }
}

/// Effective monthly rate of a position at a simulated month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRate {
    /// Monthly rate as a fraction.
    pub rate: Decimal,
    /// Whether the position has matured before this month.
    pub expired: bool,
    /// Months of growth that actually accrue.
    pub effective_months: u32,
}

/// Value totals per asset class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassTotals {
    /// Crypto subtotal.
    pub crypto: Decimal,
    /// Stock subtotal.
    pub stock: Decimal,
    /// Fixed income subtotal.
    pub fixed_income: Decimal,
    /// Real estate subtotal.
    pub real_estate: Decimal,
}

impl AssetClassTotals {
    /// Returns the subtotal for an asset class.
    #[must_use]
    pub const fn get(&self, class: AssetClass) -> Decimal {
        match class {
            AssetClass::Crypto => self.crypto,
            AssetClass::Stock => self.stock,
            AssetClass::FixedIncome => self.fixed_income,
            AssetClass::RealEstate => self.real_estate,
        }
    }

    /// Adds a value to an asset class subtotal.
    pub fn add(&mut self, class: AssetClass, value: Decimal) {
        let slot = match class {
            AssetClass::Crypto => &mut self.crypto,
            AssetClass::Stock => &mut self.stock,
            AssetClass::FixedIncome => &mut self.fixed_income,
            AssetClass::RealEstate => &mut self.real_estate,
        };
        *slot = slot.saturating_add(value);
    }

    pub(crate) fn round_dp(self, dp: u32) -> Self {
        Self {
            crypto: self.crypto.round_dp(dp),
            stock: self.stock.round_dp(dp),
            fixed_income: self.fixed_income.round_dp(dp),
            real_estate: self.real_estate.round_dp(dp),
        }
    }
}

/// Value of one position at one simulated month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValue {
    /// Position ID.
    pub position_id: PositionId,
    /// Current value.
    pub value: Decimal,
    /// Initial value plus contributions made so far.
    pub contribution_to_date: Decimal,
    /// Value minus contributions.
    pub profit: Decimal,
    /// Tax due on positive profit.
    pub tax: Decimal,
    /// Whether the position has matured.
    pub expired: bool,
}

/// One row of simulation output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMonthSnapshot {
    /// Month index, starting at 0.
    pub month: u32,
    /// Sum of position values.
    pub total_value: Decimal,
    /// Sum of contributions to date.
    pub total_contribution: Decimal,
    /// Sum of profits.
    pub total_profit: Decimal,
    /// Sum of taxes on profit.
    pub total_tax: Decimal,
    /// Profit after tax.
    pub net_profit: Decimal,
    /// Value per asset class.
    pub by_asset_class: AssetClassTotals,
}

/// A position that could not be simulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionIssue {
    /// Offending position.
    pub position_id: PositionId,
    /// First month the position was skipped.
    pub first_month: u32,
    /// Human-readable reason.
    pub reason: String,
}

/// Snapshots plus the positions skipped along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    /// One snapshot per month, months `0..=N`.
    pub snapshots: Vec<SimulationMonthSnapshot>,
    /// Per-position values at the last simulated month.
    pub final_positions: Vec<PositionValue>,
    /// Positions that contributed zero because they were malformed.
    pub issues: Vec<PositionIssue>,
}

/// Result of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    /// Unique simulation ID.
    pub simulation_id: Uuid,
    /// Hash of the request (for caching).
    pub parameters_hash: String,
    /// Simulation output.
    #[serde(flatten)]
    pub outcome: SimulationOutcome,
    /// Whether this result was returned from cache.
    pub cached: bool,
}
