//! Planned vs realized reconciliation.
//!
//! Views filter a store by period and selector; reports aggregate the two
//! stores side by side and compute variances per category.

pub mod report;
pub mod selector;
pub mod variance;
pub mod view;

pub use report::{LedgerSummary, ReconciliationReport};
pub use selector::Selector;
pub use variance::{CategoryVariance, VarianceStatus, by_category};
pub use view::{SelectedEntries, balance, monthly_total, select, select_kind, totals, variance};
