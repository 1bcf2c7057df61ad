//! Planned and realized stores of one user session.

use finplan_shared::AppResult;
use finplan_shared::config::LedgerConfig;
use finplan_shared::types::EntryId;
use rust_decimal::Decimal;
use tracing::debug;

use super::entry::{EntryKind, LedgerKind};
use super::error::LedgerError;
use super::persistence::{LedgerRepository, LedgerSnapshot};
use super::store::LedgerStore;
use crate::period::Period;
use crate::reconciliation::{ReconciliationReport, Selector};

/// The two parallel ledgers of a session, sharing one set of flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    planned: LedgerStore,
    realized: LedgerStore,
}

impl Ledger {
    /// Creates empty planned and realized stores.
    #[must_use]
    pub fn new(settings: LedgerConfig) -> Self {
        Self {
            planned: LedgerStore::new(LedgerKind::Planned, settings),
            realized: LedgerStore::new(LedgerKind::Realized, settings),
        }
    }

    /// Rebuilds both stores from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &LedgerSnapshot, settings: LedgerConfig) -> Self {
        Self {
            planned: snapshot.restore(LedgerKind::Planned, settings),
            realized: snapshot.restore(LedgerKind::Realized, settings),
        }
    }

    /// Loads the session of `user`, starting empty if nothing was saved.
    pub fn load(
        repository: &dyn LedgerRepository,
        user: &str,
        settings: LedgerConfig,
    ) -> AppResult<Self> {
        let ledger = match repository.load(user)? {
            Some(snapshot) => Self::from_snapshot(&snapshot, settings),
            None => Self::new(settings),
        };
        debug!(
            user,
            planned = ledger.planned.len(),
            realized = ledger.realized.len(),
            "Ledger loaded"
        );
        Ok(ledger)
    }

    /// Saves the authored entries of both stores.
    ///
    /// The session stays usable whether or not the save succeeds; callers
    /// should treat state as durable only after `Ok`.
    pub fn save(&self, repository: &dyn LedgerRepository, user: &str) -> AppResult<()> {
        repository.save(user, &self.snapshot())
    }

    /// Flattened authored entries of both stores.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::capture(&self.planned, &self.realized)
    }

    /// Planned store.
    #[must_use]
    pub const fn planned(&self) -> &LedgerStore {
        &self.planned
    }

    /// Planned store, mutable.
    pub fn planned_mut(&mut self) -> &mut LedgerStore {
        &mut self.planned
    }

    /// Realized store.
    #[must_use]
    pub const fn realized(&self) -> &LedgerStore {
        &self.realized
    }

    /// Realized store, mutable.
    pub fn realized_mut(&mut self) -> &mut LedgerStore {
        &mut self.realized
    }

    /// Store of the given kind.
    #[must_use]
    pub const fn store(&self, kind: LedgerKind) -> &LedgerStore {
        match kind {
            LedgerKind::Planned => &self.planned,
            LedgerKind::Realized => &self.realized,
        }
    }

    /// Store of the given kind, mutable.
    pub fn store_mut(&mut self, kind: LedgerKind) -> &mut LedgerStore {
        match kind {
            LedgerKind::Planned => &mut self.planned,
            LedgerKind::Realized => &mut self.realized,
        }
    }

    /// Current flags.
    #[must_use]
    pub const fn settings(&self) -> LedgerConfig {
        self.planned.settings()
    }

    /// Applies new flags to both stores.
    pub fn set_settings(&mut self, settings: LedgerConfig) {
        self.planned.set_settings(settings);
        self.realized.set_settings(settings);
    }

    /// Records a planned entry as realized, keeping its id.
    pub fn realize(
        &mut self,
        period: Period,
        kind: EntryKind,
        id: EntryId,
    ) -> Result<(), LedgerError> {
        let entry = self
            .planned
            .entry(period, kind, id)
            .ok_or(LedgerError::EntryNotFound { id, period, kind })?;
        if entry.is_fixed {
            return Err(LedgerError::DerivedEntryNotEditable {
                id,
                source_period: entry.source_period,
            });
        }

        let entry = entry.clone();
        self.realized.insert_authored(period, kind, entry)?;
        debug!(entry_id = %id, %period, %kind, "Planned entry realized");
        Ok(())
    }

    /// Reconciles the two stores for one period and selector.
    #[must_use]
    pub fn reconcile(
        &self,
        period: Period,
        selector: Selector,
        initial_capital: Decimal,
    ) -> ReconciliationReport {
        ReconciliationReport::build(
            &self.planned,
            &self.realized,
            period,
            selector,
            initial_capital,
        )
    }
}
