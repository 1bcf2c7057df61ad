//! Planned and realized ledgers across four time granularities.
//!
//! This module implements:
//! - Ledger entries, drafts and patches
//! - Period-partitioned stores with upward propagation
//! - Month-to-month replication
//! - Reorder sessions with stale-snapshot detection
//! - Snapshot persistence behind a repository port
//! - The planned/realized session pair

pub mod entry;
pub mod error;
pub mod persistence;
pub mod session;
pub mod store;
pub mod validation;

#[cfg(test)]
mod store_props;

pub use entry::{EntryDraft, EntryKind, EntryPatch, LedgerEntry, LedgerKind};
pub use error::LedgerError;
pub use finplan_shared::config::LedgerConfig as LedgerSettings;
pub use persistence::{InMemoryLedgerRepository, LedgerRepository, LedgerSnapshot, SpendingEntry};
pub use session::Ledger;
pub use store::{LedgerStore, PeriodEntries, ReorderSession};
