//! Planner configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;

/// Planner configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Ledger mutation flags.
    pub ledger: LedgerConfig,
    /// Portfolio simulation settings.
    pub simulation: SimulationConfig,
}

/// Flags that alter ledger mutation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Propagate authored entries into every larger period.
    pub link_periods: bool,
    /// Copy income entries forward when the active month changes.
    pub replicate_income_to_all_months: bool,
    /// Copy expense entries forward when the active month changes.
    pub replicate_expenses_to_all_months: bool,
}

/// Portfolio simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Annual benchmark estimates, in percent.
    pub benchmarks: BenchmarkConfig,
    /// Default crypto volatility, in percent per month.
    pub volatility_percent: Decimal,
    /// Maximum number of cached simulation reports.
    pub cache_capacity: u64,
    /// Time-to-live of a cached report, in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            benchmarks: BenchmarkConfig::default(),
            volatility_percent: Decimal::TEN,
            cache_capacity: 100,
            cache_ttl_secs: 300, // 5 minutes
        }
    }
}

/// Annual benchmark estimates in percent.
///
/// These are illustrative defaults, not live market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Interbank deposit rate.
    pub cdi: Decimal,
    /// Central bank policy rate.
    pub selic: Decimal,
    /// Consumer price index.
    pub ipca: Decimal,
    /// Savings account yield.
    pub poupanca: Decimal,
    /// Reference rate.
    pub tr: Decimal,
    /// General market price index.
    pub igpm: Decimal,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            cdi: Decimal::new(12, 0),
            selic: Decimal::new(1125, 2),
            ipca: Decimal::new(6, 0),
            poupanca: Decimal::new(85, 1),
            tr: Decimal::new(25, 1),
            igpm: Decimal::new(7, 0),
        }
    }
}

impl PlannerConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Every key is optional; missing keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but cannot be parsed.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINPLAN").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
