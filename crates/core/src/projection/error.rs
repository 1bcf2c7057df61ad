//! Projection error types.

use finplan_shared::AppError;
use thiserror::Error;

/// Projection-related errors.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Safe withdrawal rate must be positive.
    #[error("Safe withdrawal rate must be greater than zero")]
    ZeroWithdrawalRate,

    /// Horizon must cover at least one year.
    #[error("Horizon must be at least one year")]
    EmptyHorizon,
}

impl From<ProjectionError> for AppError {
    fn from(err: ProjectionError) -> Self {
        Self::Validation(err.to_string())
    }
}
