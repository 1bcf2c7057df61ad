//! Persistence port for ledger state.
//!
//! Stores are flattened into four arrays of [`SpendingEntry`] records with an
//! explicit period tag. Only authored entries are written; derived copies are
//! rebuilt when the snapshot is restored.

use std::collections::HashMap;
use std::sync::RwLock;

use finplan_shared::config::LedgerConfig;
use finplan_shared::types::EntryId;
use finplan_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::entry::{EntryKind, LedgerEntry, LedgerKind};
use super::store::LedgerStore;
use crate::period::Period;

/// One persisted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingEntry {
    /// Entry ID.
    pub id: EntryId,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Amount.
    pub value: Decimal,
    /// Category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    /// Period the entry belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Year locator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Month locator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Week of month locator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    /// Day of week locator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u32>,
}

impl SpendingEntry {
    /// Flattens a store entry, tagging it with its period.
    #[must_use]
    pub fn from_entry(entry: &LedgerEntry, period: Period) -> Self {
        Self {
            id: entry.id,
            description: entry.description.clone(),
            value: entry.value,
            expense_type: entry.expense_type.clone(),
            period: Some(period),
            year: entry.year,
            month: entry.month,
            week: entry.week,
            day_of_week: entry.day_of_week,
        }
    }

    /// Period of the record.
    ///
    /// Untagged records are classified by their most specific locator:
    /// `dayOfWeek` means DIARIO, `week` SEMANAL, `month` MENSAL, a bare
    /// `year` ANUAL, and anything else MENSAL.
    #[must_use]
    pub fn resolved_period(&self) -> Period {
        if let Some(period) = self.period {
            return period;
        }
        if self.day_of_week.is_some() {
            Period::Daily
        } else if self.week.is_some() {
            Period::Weekly
        } else if self.month.is_some() {
            Period::Monthly
        } else if self.year.is_some() {
            Period::Annual
        } else {
            Period::Monthly
        }
    }

    /// Converts the record back into an authored entry.
    #[must_use]
    pub fn to_entry(&self) -> LedgerEntry {
        LedgerEntry {
            id: self.id,
            description: self.description.clone(),
            value: self.value,
            expense_type: self.expense_type.clone(),
            year: self.year,
            month: self.month,
            week: self.week,
            day_of_week: self.day_of_week,
            is_fixed: false,
            source_period: None,
        }
    }
}

/// Flattened planned and realized ledgers of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerSnapshot {
    /// Planned income.
    pub planned_income: Vec<SpendingEntry>,
    /// Planned expenses.
    pub planned_expenses: Vec<SpendingEntry>,
    /// Realized income.
    pub realized_income: Vec<SpendingEntry>,
    /// Realized expenses.
    pub realized_expenses: Vec<SpendingEntry>,
}

impl LedgerSnapshot {
    /// Captures the authored entries of both stores.
    #[must_use]
    pub fn capture(planned: &LedgerStore, realized: &LedgerStore) -> Self {
        Self {
            planned_income: flatten(planned, EntryKind::Income),
            planned_expenses: flatten(planned, EntryKind::Expense),
            realized_income: flatten(realized, EntryKind::Income),
            realized_expenses: flatten(realized, EntryKind::Expense),
        }
    }

    /// Rebuilds one store from the snapshot.
    ///
    /// Records that fail validation or repeat an id are skipped and logged.
    #[must_use]
    pub fn restore(&self, kind: LedgerKind, settings: LedgerConfig) -> LedgerStore {
        let (income, expenses) = match kind {
            LedgerKind::Planned => (&self.planned_income, &self.planned_expenses),
            LedgerKind::Realized => (&self.realized_income, &self.realized_expenses),
        };

        let mut store = LedgerStore::new(kind, settings);
        for (entry_kind, records) in [(EntryKind::Income, income), (EntryKind::Expense, expenses)] {
            for record in records {
                let period = record.resolved_period();
                if let Err(err) = store.insert_authored(period, entry_kind, record.to_entry()) {
                    warn!(
                        store = ?kind,
                        entry_id = %record.id,
                        %period,
                        error = %err,
                        "Skipping persisted entry"
                    );
                }
            }
        }
        store
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planned_income.len()
            + self.planned_expenses.len()
            + self.realized_income.len()
            + self.realized_expenses.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Persistence(e.to_string()))
    }
}

fn flatten(store: &LedgerStore, kind: EntryKind) -> Vec<SpendingEntry> {
    Period::ALL
        .into_iter()
        .flat_map(|period| {
            store
                .authored(period, kind)
                .map(move |entry| SpendingEntry::from_entry(entry, period))
        })
        .collect()
}

/// Durable storage for ledger snapshots, keyed by an opaque user identity.
pub trait LedgerRepository: Send + Sync {
    /// Loads the snapshot of `user`, if one was saved.
    fn load(&self, user: &str) -> AppResult<Option<LedgerSnapshot>>;

    /// Replaces the snapshot of `user`.
    fn save(&self, user: &str, snapshot: &LedgerSnapshot) -> AppResult<()>;
}

/// Repository holding JSON-encoded snapshots in memory.
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    snapshots: RwLock<HashMap<String, String>>,
}

impl InMemoryLedgerRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a saved snapshot.
    pub fn user_count(&self) -> AppResult<usize> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(snapshots.len())
    }
}

impl LedgerRepository for InMemoryLedgerRepository {
    fn load(&self, user: &str) -> AppResult<Option<LedgerSnapshot>> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        snapshots
            .get(user)
            .map(|json| LedgerSnapshot::from_json(json))
            .transpose()
    }

    fn save(&self, user: &str, snapshot: &LedgerSnapshot) -> AppResult<()> {
        let json = snapshot.to_json()?;
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        snapshots.insert(user.to_string(), json);
        debug!(user, records = snapshot.len(), "Ledger snapshot saved");
        Ok(())
    }
}
