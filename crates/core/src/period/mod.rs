//! Time granularities and conversion between them.

pub mod converter;
pub mod types;

pub use converter::{convert, monthly_equivalent};
pub use types::Period;
