//! Simulation error types.

use finplan_shared::AppError;
use finplan_shared::types::PositionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a position cannot be simulated.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Initial value is negative.
    #[error("Position {0} has a negative initial value")]
    NegativeInitialValue(PositionId),

    /// Monthly contribution is negative.
    #[error("Position {0} has a negative monthly contribution")]
    NegativeContribution(PositionId),

    /// Tax rate outside 0-100%.
    #[error("Position {position} has tax rate {rate}%, expected 0 to 100")]
    InvalidTaxRate {
        /// Position ID.
        position: PositionId,
        /// Configured rate.
        rate: Decimal,
    },

    /// Benchmark-indexed model on a non fixed income position.
    #[error("Position {0} uses an indexed return model but is not fixed income")]
    IndexedRequiresFixedIncome(PositionId),

    /// Monthly rate would lose more than the whole position.
    #[error("Position {0} has a monthly rate below -100%")]
    RateBelowTotalLoss(PositionId),
}

impl From<SimulationError> for AppError {
    fn from(err: SimulationError) -> Self {
        Self::Validation(err.to_string())
    }
}
