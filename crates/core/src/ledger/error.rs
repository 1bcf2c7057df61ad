//! Ledger error types.
//!
//! Every error returned by a store mutation means the store was left
//! exactly as it was before the call.

use finplan_shared::AppError;
use finplan_shared::types::EntryId;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::period::Period;

use super::entry::EntryKind;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Lookup Errors ==========
    /// No entry with this id in the given period.
    #[error("Entry {id} not found in {period} {kind}")]
    EntryNotFound {
        /// Entry ID.
        id: EntryId,
        /// Period searched.
        period: Period,
        /// Side searched.
        kind: EntryKind,
    },

    /// An entry with this id already exists in the target period.
    #[error("Entry {0} already exists")]
    DuplicateEntry(EntryId),

    // ========== Validation Errors ==========
    /// Entry value cannot be negative.
    #[error("Entry value cannot be negative: {0}")]
    NegativeValue(Decimal),

    /// A locator field is outside its range.
    #[error("Invalid {field}: {value}")]
    InvalidLocator {
        /// Locator field name.
        field: &'static str,
        /// Offending value.
        value: u32,
    },

    // ========== Derived Entry Errors ==========
    /// Derived copies are edited through their source entry.
    #[error("Entry {id} is derived from {source_period:?} and cannot be edited directly")]
    DerivedEntryNotEditable {
        /// Entry ID.
        id: EntryId,
        /// Period holding the authored entry.
        source_period: Option<Period>,
    },

    // ========== Reorder Errors ==========
    /// Reorder index outside the sequence.
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Sequence length.
        len: usize,
    },

    /// The store changed while a reorder was in progress.
    #[error("Reorder started at revision {expected} but store is at {actual}")]
    StaleReorder {
        /// Revision captured when the reorder began.
        expected: u64,
        /// Current revision.
        actual: u64,
    },
}

impl LedgerError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EntryNotFound { .. } => "ENTRY_NOT_FOUND",
            Self::DuplicateEntry(_) => "DUPLICATE_ENTRY",
            Self::NegativeValue(_) => "NEGATIVE_VALUE",
            Self::InvalidLocator { .. } => "INVALID_LOCATOR",
            Self::DerivedEntryNotEditable { .. } => "DERIVED_ENTRY_NOT_EDITABLE",
            Self::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Self::StaleReorder { .. } => "STALE_REORDER",
        }
    }

    /// Returns true if the caller can retry after refreshing its view.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::StaleReorder { .. })
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::EntryNotFound { .. } => Self::NotFound(err.to_string()),
            LedgerError::DuplicateEntry(_) | LedgerError::StaleReorder { .. } => {
                Self::Conflict(err.to_string())
            }
            LedgerError::DerivedEntryNotEditable { .. } => Self::BusinessRule(err.to_string()),
            LedgerError::NegativeValue(_)
            | LedgerError::InvalidLocator { .. }
            | LedgerError::IndexOutOfRange { .. } => Self::Validation(err.to_string()),
        }
    }
}
