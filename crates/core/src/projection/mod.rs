//! Compound growth projections.
//!
//! - `series` - month-indexed principal plus contribution growth
//! - `growth` - shared future-value arithmetic
//! - `independence` - months until savings cover living expenses

pub mod error;
pub mod growth;
pub mod independence;
pub mod series;
pub mod types;


pub use error::ProjectionError;
pub use growth::{future_value, growth_factor};
pub use independence::{FiPlan, FiProjection};
pub use series::{CompoundSeries, generate};
pub use types::{CompoundParams, RatePeriod, SeriesPoint, TermUnit};
