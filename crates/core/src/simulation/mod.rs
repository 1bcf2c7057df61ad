//! Multi-asset portfolio simulation.

pub mod cache;
pub mod engine;
pub mod error;
pub mod jitter;
pub mod rates;
pub mod resolver;
pub mod types;


#[cfg(test)]
mod benchmark;

pub use cache::SimulationCache;
pub use engine::PortfolioSimulator;
pub use error::SimulationError;
pub use jitter::{JitterSource, NoJitter, SeededJitter};
pub use rates::BenchmarkRates;
pub use resolver::ReturnRateResolver;
pub use types::{
    AssetClass, AssetClassTotals, Indexer, InvestmentPosition, MonthlyRate, PortfolioReport,
    PortfolioRequest, PositionIssue, PositionValue, ReturnModel, RiskLevel,
    SimulationMonthSnapshot, SimulationOutcome,
};
