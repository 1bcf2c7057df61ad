//! Core planning logic for Finplan.
//!
//! This crate contains pure computation and in-memory state with ZERO UI or
//! storage dependencies. Persistence goes through the
//! [`ledger::LedgerRepository`] port.
//!
//! # Modules
//!
//! - `period` - Time granularities and conversion between them
//! - `projection` - Compound growth series and financial independence
//! - `simulation` - Month-by-month multi-asset portfolio simulation
//! - `ledger` - Planned and realized entries with cross-period propagation
//! - `reconciliation` - Filtered views, totals and planned vs realized variance

pub mod ledger;
pub mod period;
pub mod projection;
pub mod reconciliation;
pub mod simulation;
