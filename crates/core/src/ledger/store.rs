//! Period-partitioned entry store with cross-period propagation.
//!
//! A store holds four parallel collections (one per [`Period`]), each with an
//! ordered income and an ordered expense sequence. When period linking is
//! enabled, every authored entry also appears as a derived copy in each
//! strictly larger period, converted with [`crate::period::convert`]. Derived
//! copies are never a source of truth: they are overwritten whenever their
//! source changes and can always be rebuilt from authored entries.

use finplan_shared::config::LedgerConfig;
use finplan_shared::types::EntryId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::entry::{EntryDraft, EntryKind, EntryPatch, LedgerEntry, LedgerKind};
use super::error::LedgerError;
use super::validation::{validate_entry, validate_month};
use crate::period::Period;

/// Income and expense sequences of one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntries {
    /// Income entries in display order.
    #[serde(rename = "receitas")]
    pub income: Vec<LedgerEntry>,
    /// Expense entries in display order.
    #[serde(rename = "despesas")]
    pub expenses: Vec<LedgerEntry>,
}

impl PeriodEntries {
    /// Returns the sequence for one side.
    #[must_use]
    pub fn get(&self, kind: EntryKind) -> &[LedgerEntry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn get_mut(&mut self, kind: EntryKind) -> &mut Vec<LedgerEntry> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }
}

/// A frozen view of one sequence, taken when a reorder gesture begins.
///
/// The snapshot does not change while the gesture is in progress, even if
/// the store does. Dropping the session abandons the reorder.
#[derive(Debug, Clone)]
#[must_use = "a reorder session does nothing until passed to end_reorder"]
pub struct ReorderSession {
    period: Period,
    kind: EntryKind,
    revision: u64,
    snapshot: Vec<LedgerEntry>,
}

impl ReorderSession {
    /// Entries as they were when the reorder began.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.snapshot
    }

    /// Period being reordered.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Side being reordered.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Planned or realized entries across the four periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerStore {
    kind: LedgerKind,
    settings: LedgerConfig,
    periods: [PeriodEntries; 4],
    next_id: u64,
    revision: u64,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(kind: LedgerKind, settings: LedgerConfig) -> Self {
        Self {
            kind,
            settings,
            periods: Default::default(),
            next_id: kind.first_id(),
            revision: 0,
        }
    }

    /// Which ledger this store holds.
    #[must_use]
    pub const fn kind(&self) -> LedgerKind {
        self.kind
    }

    /// Current mutation flags.
    #[must_use]
    pub const fn settings(&self) -> LedgerConfig {
        self.settings
    }

    /// Replaces the mutation flags.
    ///
    /// Toggling period linking rebuilds every derived copy.
    pub fn set_settings(&mut self, settings: LedgerConfig) {
        let relink = settings.link_periods != self.settings.link_periods;
        self.settings = settings;
        if relink {
            self.rebuild_derived();
        }
    }

    /// Counter bumped by every successful mutation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Entries of one period and side, in display order.
    #[must_use]
    pub fn entries(&self, period: Period, kind: EntryKind) -> &[LedgerEntry] {
        self.periods[period.index()].get(kind)
    }

    /// Both sides of one period.
    #[must_use]
    pub fn period(&self, period: Period) -> &PeriodEntries {
        &self.periods[period.index()]
    }

    /// Looks up an entry by id within one period and side.
    #[must_use]
    pub fn entry(&self, period: Period, kind: EntryKind, id: EntryId) -> Option<&LedgerEntry> {
        self.entries(period, kind).iter().find(|e| e.id == id)
    }

    /// Authored (non-derived) entries of one period and side.
    pub fn authored(&self, period: Period, kind: EntryKind) -> impl Iterator<Item = &LedgerEntry> {
        self.entries(period, kind).iter().filter(|e| e.is_authored())
    }

    /// Total number of entries, derived copies included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods
            .iter()
            .map(|p| p.income.len() + p.expenses.len())
            .sum()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a new authored entry and returns its id.
    ///
    /// With linking enabled, derived copies are upserted into every larger
    /// period.
    pub fn add_entry(
        &mut self,
        period: Period,
        kind: EntryKind,
        draft: EntryDraft,
    ) -> Result<EntryId, LedgerError> {
        let id = EntryId::new(self.next_id);
        let entry = draft.into_entry(id);
        validate_entry(&entry)?;

        self.next_id = self.next_id.saturating_add(1);
        self.insert(period, kind, entry);

        debug!(store = ?self.kind, %period, %kind, entry_id = %id, "Entry added");
        Ok(id)
    }

    /// Inserts an authored entry keeping its id.
    ///
    /// Used when loading persisted entries and when copying a planned entry
    /// into the realized store. Later ids are allocated past `entry.id`.
    pub fn insert_authored(
        &mut self,
        period: Period,
        kind: EntryKind,
        mut entry: LedgerEntry,
    ) -> Result<(), LedgerError> {
        entry.is_fixed = false;
        entry.source_period = None;
        validate_entry(&entry)?;
        if self.contains_id(entry.id) {
            return Err(LedgerError::DuplicateEntry(entry.id));
        }

        self.next_id = self.next_id.max(entry.id.into_inner().saturating_add(1));
        self.insert(period, kind, entry);
        Ok(())
    }

    /// Applies a patch to an authored entry.
    ///
    /// Derived copies are rejected and left untouched; edit the entry in its
    /// source period instead, which re-propagates to every larger period.
    pub fn update_entry(
        &mut self,
        id: EntryId,
        period: Period,
        kind: EntryKind,
        patch: &EntryPatch,
    ) -> Result<(), LedgerError> {
        let current = self
            .entry(period, kind, id)
            .ok_or(LedgerError::EntryNotFound { id, period, kind })?;

        if current.is_fixed {
            let source_period = current.source_period;
            warn!(
                entry_id = %id,
                %period,
                source_period = ?source_period,
                "Rejected edit of derived entry"
            );
            return Err(LedgerError::DerivedEntryNotEditable { id, source_period });
        }

        let updated = patch.apply_to(current);
        validate_entry(&updated)?;

        if self.settings.link_periods {
            self.propagate(&updated, period, kind);
        }
        if let Some(slot) = self.sequence_mut(period, kind).iter_mut().find(|e| e.id == id) {
            *slot = updated;
        }
        self.revision += 1;

        debug!(entry_id = %id, %period, %kind, "Entry updated");
        Ok(())
    }

    /// Removes an entry and returns it.
    ///
    /// With linking enabled the id is removed from every period; otherwise
    /// only from `period`.
    pub fn remove_entry(
        &mut self,
        id: EntryId,
        period: Period,
        kind: EntryKind,
    ) -> Result<LedgerEntry, LedgerError> {
        let index = self
            .entries(period, kind)
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::EntryNotFound { id, period, kind })?;

        let removed = self.sequence_mut(period, kind).remove(index);
        if self.settings.link_periods {
            for other in Period::ALL.into_iter().filter(|p| *p != period) {
                self.sequence_mut(other, kind).retain(|e| e.id != id);
            }
        }
        self.revision += 1;

        debug!(entry_id = %id, %period, %kind, linked = self.settings.link_periods, "Entry removed");
        Ok(removed)
    }

    /// Moves an entry within one sequence. Other periods are not affected.
    pub fn reorder(
        &mut self,
        period: Period,
        kind: EntryKind,
        from: usize,
        to: usize,
    ) -> Result<(), LedgerError> {
        let sequence = self.sequence_mut(period, kind);
        let len = sequence.len();
        if let Some(index) = [from, to].into_iter().find(|i| *i >= len) {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }

        let entry = sequence.remove(from);
        sequence.insert(to, entry);
        self.revision += 1;
        Ok(())
    }

    /// Starts a reorder gesture by freezing the current sequence.
    pub fn begin_reorder(&self, period: Period, kind: EntryKind) -> ReorderSession {
        ReorderSession {
            period,
            kind,
            revision: self.revision,
            snapshot: self.entries(period, kind).to_vec(),
        }
    }

    /// Completes a reorder gesture.
    ///
    /// Indices refer to the session snapshot. If the store changed since the
    /// session began, the move is abandoned.
    pub fn end_reorder(
        &mut self,
        session: ReorderSession,
        from: usize,
        to: usize,
    ) -> Result<(), LedgerError> {
        if session.revision != self.revision {
            warn!(
                period = %session.period,
                kind = %session.kind,
                expected = session.revision,
                actual = self.revision,
                "Abandoned stale reorder"
            );
            return Err(LedgerError::StaleReorder {
                expected: session.revision,
                actual: self.revision,
            });
        }
        self.reorder(session.period, session.kind, from, to)
    }

    /// Copies the authored entries of `previous_month` into `new_month`.
    ///
    /// Runs only when the replication flag for `kind` is enabled, and only if
    /// `new_month` has no authored entries yet for `year`. Clones get fresh
    /// ids. Returns the ids created.
    pub fn replicate_to_new_month(
        &mut self,
        new_month: u32,
        previous_month: u32,
        year: i32,
        period: Period,
        kind: EntryKind,
    ) -> Result<Vec<EntryId>, LedgerError> {
        let enabled = match kind {
            EntryKind::Income => self.settings.replicate_income_to_all_months,
            EntryKind::Expense => self.settings.replicate_expenses_to_all_months,
        };
        if !enabled || new_month == previous_month {
            return Ok(Vec::new());
        }
        validate_month(new_month)?;
        validate_month(previous_month)?;

        let in_month = |e: &LedgerEntry, month: u32| {
            e.is_authored() && e.year == Some(year) && e.month == Some(month)
        };
        let sequence = self.entries(period, kind);
        if sequence.iter().any(|e| in_month(e, new_month)) {
            debug!(%period, %kind, year, new_month, "Replication skipped, month already has entries");
            return Ok(Vec::new());
        }

        let sources: Vec<LedgerEntry> = sequence
            .iter()
            .filter(|e| in_month(e, previous_month))
            .cloned()
            .collect();

        let mut created = Vec::with_capacity(sources.len());
        for source in sources {
            let id = EntryId::new(self.next_id);
            self.next_id = self.next_id.saturating_add(1);
            let clone = LedgerEntry {
                id,
                month: Some(new_month),
                ..source
            };
            if self.settings.link_periods {
                self.propagate(&clone, period, kind);
            }
            self.sequence_mut(period, kind).push(clone);
            created.push(id);
        }

        if !created.is_empty() {
            self.revision += 1;
            debug!(%period, %kind, year, new_month, count = created.len(), "Entries replicated");
        }
        Ok(created)
    }

    /// Drops every derived copy and, if linking is enabled, recomputes them
    /// from the authored entries.
    pub fn rebuild_derived(&mut self) {
        for entries in &mut self.periods {
            entries.income.retain(LedgerEntry::is_authored);
            entries.expenses.retain(LedgerEntry::is_authored);
        }

        if self.settings.link_periods {
            for period in Period::ALL {
                for kind in EntryKind::ALL {
                    let sources: Vec<LedgerEntry> = self.authored(period, kind).cloned().collect();
                    for source in &sources {
                        self.propagate(source, period, kind);
                    }
                }
            }
        }
        self.revision += 1;
    }

    fn insert(&mut self, period: Period, kind: EntryKind, entry: LedgerEntry) {
        if self.settings.link_periods {
            self.propagate(&entry, period, kind);
        }
        self.sequence_mut(period, kind).push(entry);
        self.revision += 1;
    }

    /// Upserts derived copies of `source` into every period larger than `from`.
    fn propagate(&mut self, source: &LedgerEntry, from: Period, kind: EntryKind) {
        for to in from.larger() {
            let copy = source.derived_copy(from, to);
            let sequence = self.sequence_mut(to, kind);
            match sequence.iter_mut().find(|e| e.id == copy.id) {
                Some(existing) => *existing = copy,
                None => sequence.push(copy),
            }
        }
    }

    fn contains_id(&self, id: EntryId) -> bool {
        self.periods
            .iter()
            .flat_map(|p| p.income.iter().chain(&p.expenses))
            .any(|e| e.id == id)
    }

    fn sequence_mut(&mut self, period: Period, kind: EntryKind) -> &mut Vec<LedgerEntry> {
        self.periods[period.index()].get_mut(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::convert;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn linked() -> LedgerConfig {
        LedgerConfig {
            link_periods: true,
            ..LedgerConfig::default()
        }
    }

    fn planned(settings: LedgerConfig) -> LedgerStore {
        LedgerStore::new(LedgerKind::Planned, settings)
    }

    #[test]
    fn test_add_without_linking_stays_in_period() {
        let mut store = planned(LedgerConfig::default());

        let id = store
            .add_entry(Period::Weekly, EntryKind::Expense, EntryDraft::new("Fuel", dec!(70)))
            .unwrap();

        assert_eq!(id, EntryId::new(1));
        assert_eq!(store.entries(Period::Weekly, EntryKind::Expense).len(), 1);
        assert!(store.entries(Period::Monthly, EntryKind::Expense).is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_weekly_entry_propagates_upward() {
        let mut store = planned(linked());

        let id = store
            .add_entry(Period::Weekly, EntryKind::Expense, EntryDraft::new("Fuel", dec!(70)))
            .unwrap();

        let monthly = store.entry(Period::Monthly, EntryKind::Expense, id).unwrap();
        assert!(monthly.is_fixed);
        assert_eq!(monthly.source_period, Some(Period::Weekly));
        assert_eq!(monthly.value, dec!(303.1));

        let annual = store.entry(Period::Annual, EntryKind::Expense, id).unwrap();
        assert_eq!(annual.value, dec!(3637.2));

        assert!(store.entries(Period::Daily, EntryKind::Expense).is_empty());
        assert!(store.entries(Period::Monthly, EntryKind::Income).is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut store = planned(linked());
        let before = store.clone();

        let result = store.add_entry(
            Period::Daily,
            EntryKind::Income,
            EntryDraft::new("Bad", dec!(-1)),
        );

        assert!(matches!(result, Err(LedgerError::NegativeValue(_))));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_repropagates() {
        let mut store = planned(linked());
        let id = store
            .add_entry(Period::Daily, EntryKind::Expense, EntryDraft::new("Coffee", dec!(5)))
            .unwrap();

        let patch = EntryPatch {
            value: Some(dec!(6)),
            ..EntryPatch::default()
        };
        store
            .update_entry(id, Period::Daily, EntryKind::Expense, &patch)
            .unwrap();

        assert_eq!(
            store.entry(Period::Daily, EntryKind::Expense, id).unwrap().value,
            dec!(6)
        );
        assert_eq!(
            store.entry(Period::Weekly, EntryKind::Expense, id).unwrap().value,
            convert(dec!(6), Period::Daily, Period::Weekly)
        );
        assert_eq!(
            store.entry(Period::Monthly, EntryKind::Expense, id).unwrap().value,
            dec!(180)
        );
        assert_eq!(
            store.entry(Period::Annual, EntryKind::Expense, id).unwrap().value,
            dec!(2160)
        );
        assert_eq!(store.entries(Period::Monthly, EntryKind::Expense).len(), 1);
    }

    #[test]
    fn test_update_of_derived_copy_is_rejected() {
        let mut store = planned(linked());
        let id = store
            .add_entry(Period::Weekly, EntryKind::Income, EntryDraft::new("Tips", dec!(50)))
            .unwrap();
        let before = store.clone();

        let patch = EntryPatch {
            value: Some(dec!(1)),
            ..EntryPatch::default()
        };
        let result = store.update_entry(id, Period::Monthly, EntryKind::Income, &patch);

        assert!(matches!(
            result,
            Err(LedgerError::DerivedEntryNotEditable {
                source_period: Some(Period::Weekly),
                ..
            })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_unknown_entry() {
        let mut store = planned(LedgerConfig::default());
        let result = store.update_entry(
            EntryId::new(99),
            Period::Monthly,
            EntryKind::Income,
            &EntryPatch::default(),
        );
        assert!(matches!(result, Err(LedgerError::EntryNotFound { .. })));
    }

    #[test]
    fn test_remove_linked_removes_everywhere() {
        let mut store = planned(linked());
        let id = store
            .add_entry(Period::Daily, EntryKind::Expense, EntryDraft::new("Lunch", dec!(20)))
            .unwrap();
        let other = store
            .add_entry(Period::Daily, EntryKind::Expense, EntryDraft::new("Bus", dec!(4)))
            .unwrap();

        let removed = store
            .remove_entry(id, Period::Daily, EntryKind::Expense)
            .unwrap();

        assert_eq!(removed.description, "Lunch");
        for period in Period::ALL {
            assert!(store.entry(period, EntryKind::Expense, id).is_none());
            assert!(store.entry(period, EntryKind::Expense, other).is_some());
        }
    }

    #[test]
    fn test_remove_unlinked_only_touches_period() {
        let mut store = planned(linked());
        let id = store
            .add_entry(Period::Weekly, EntryKind::Expense, EntryDraft::new("Gym", dec!(30)))
            .unwrap();
        store.set_settings(LedgerConfig::default());
        // turning linking off drops the derived copies
        assert!(store.entry(Period::Monthly, EntryKind::Expense, id).is_none());

        store
            .remove_entry(id, Period::Weekly, EntryKind::Expense)
            .unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_reorder_within_period_only() {
        let mut store = planned(linked());
        for (name, value) in [("A", dec!(1)), ("B", dec!(2)), ("C", dec!(3))] {
            store
                .add_entry(Period::Weekly, EntryKind::Income, EntryDraft::new(name, value))
                .unwrap();
        }

        store.reorder(Period::Weekly, EntryKind::Income, 0, 2).unwrap();

        let weekly: Vec<_> = store
            .entries(Period::Weekly, EntryKind::Income)
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(weekly, ["B", "C", "A"]);

        let monthly: Vec<_> = store
            .entries(Period::Monthly, EntryKind::Income)
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(monthly, ["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_out_of_range_leaves_store_unchanged() {
        let mut store = planned(LedgerConfig::default());
        store
            .add_entry(Period::Monthly, EntryKind::Income, EntryDraft::new("A", dec!(1)))
            .unwrap();
        let before = store.clone();

        let result = store.reorder(Period::Monthly, EntryKind::Income, 0, 1);

        assert!(matches!(
            result,
            Err(LedgerError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_reorder_session_snapshot_is_stable() {
        let mut store = planned(LedgerConfig::default());
        store
            .add_entry(Period::Monthly, EntryKind::Expense, EntryDraft::new("A", dec!(1)))
            .unwrap();
        store
            .add_entry(Period::Monthly, EntryKind::Expense, EntryDraft::new("B", dec!(2)))
            .unwrap();

        let session = store.begin_reorder(Period::Monthly, EntryKind::Expense);
        assert_eq!(session.entries().len(), 2);

        store.end_reorder(session, 1, 0).unwrap();
        assert_eq!(
            store.entries(Period::Monthly, EntryKind::Expense)[0].description,
            "B"
        );
    }

    #[test]
    fn test_stale_reorder_is_abandoned() {
        let mut store = planned(LedgerConfig::default());
        store
            .add_entry(Period::Monthly, EntryKind::Expense, EntryDraft::new("A", dec!(1)))
            .unwrap();
        store
            .add_entry(Period::Monthly, EntryKind::Expense, EntryDraft::new("B", dec!(2)))
            .unwrap();

        let session = store.begin_reorder(Period::Monthly, EntryKind::Expense);
        store
            .add_entry(Period::Monthly, EntryKind::Expense, EntryDraft::new("C", dec!(3)))
            .unwrap();
        let before = store.clone();

        let result = store.end_reorder(session, 0, 1);

        assert!(matches!(result, Err(LedgerError::StaleReorder { .. })));
        assert_eq!(store, before);
    }

    #[test]
    fn test_replicate_to_new_month() {
        let mut store = planned(LedgerConfig {
            replicate_expenses_to_all_months: true,
            ..LedgerConfig::default()
        });
        store
            .add_entry(
                Period::Monthly,
                EntryKind::Expense,
                EntryDraft::new("Rent", dec!(1500)).in_month(2025, 3),
            )
            .unwrap();
        store
            .add_entry(
                Period::Monthly,
                EntryKind::Expense,
                EntryDraft::new("Old rent", dec!(1400)).in_month(2024, 3),
            )
            .unwrap();

        let created = store
            .replicate_to_new_month(4, 3, 2025, Period::Monthly, EntryKind::Expense)
            .unwrap();

        assert_eq!(created.len(), 1);
        let clone = store
            .entry(Period::Monthly, EntryKind::Expense, created[0])
            .unwrap();
        assert_eq!(clone.month, Some(4));
        assert_eq!(clone.year, Some(2025));
        assert_eq!(clone.description, "Rent");
        assert_ne!(created[0], EntryId::new(1));

        // never overwrites a month that already has entries
        let again = store
            .replicate_to_new_month(4, 3, 2025, Period::Monthly, EntryKind::Expense)
            .unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_replicate_requires_flag_for_kind() {
        let mut store = planned(LedgerConfig {
            replicate_expenses_to_all_months: true,
            ..LedgerConfig::default()
        });
        store
            .add_entry(
                Period::Monthly,
                EntryKind::Income,
                EntryDraft::new("Salary", dec!(5000)).in_month(2025, 1),
            )
            .unwrap();
        let before = store.clone();

        let created = store
            .replicate_to_new_month(2, 1, 2025, Period::Monthly, EntryKind::Income)
            .unwrap();

        assert!(created.is_empty());
        assert_eq!(store, before);
    }

    #[test]
    fn test_replicate_skips_derived_entries() {
        let mut store = planned(LedgerConfig {
            link_periods: true,
            replicate_income_to_all_months: true,
            ..LedgerConfig::default()
        });
        store
            .add_entry(
                Period::Weekly,
                EntryKind::Income,
                EntryDraft::new("Freelance", dec!(100)).in_month(2025, 5),
            )
            .unwrap();

        // the monthly sequence only holds the derived copy
        let created = store
            .replicate_to_new_month(6, 5, 2025, Period::Monthly, EntryKind::Income)
            .unwrap();
        assert!(created.is_empty());
    }

    #[test]
    fn test_replicated_clone_propagates_when_linked() {
        let mut store = planned(LedgerConfig {
            link_periods: true,
            replicate_expenses_to_all_months: true,
            ..LedgerConfig::default()
        });
        let source = store
            .add_entry(
                Period::Monthly,
                EntryKind::Expense,
                EntryDraft::new("Rent", dec!(1500)).in_month(2025, 3),
            )
            .unwrap();

        let created = store
            .replicate_to_new_month(4, 3, 2025, Period::Monthly, EntryKind::Expense)
            .unwrap();

        assert_eq!(created.len(), 1);
        let clone_id = created[0];
        assert_ne!(clone_id, source);
        let annual = store.entry(Period::Annual, EntryKind::Expense, clone_id).unwrap();
        assert!(annual.is_fixed);
        assert_eq!(annual.source_period, Some(Period::Monthly));
        assert_eq!(annual.month, Some(4));
        assert_eq!(annual.value, dec!(18000));
        assert_eq!(store.entries(Period::Annual, EntryKind::Expense).len(), 2);
    }

    #[test]
    fn test_huge_linked_value_saturates() {
        let mut store = planned(linked());

        let id = store
            .add_entry(
                Period::Daily,
                EntryKind::Income,
                EntryDraft::from_input("Windfall", "79228162514264337593543950335"),
            )
            .unwrap();

        assert_eq!(
            store.entry(Period::Monthly, EntryKind::Income, id).unwrap().value,
            Decimal::MAX
        );
        assert_eq!(
            store.entry(Period::Annual, EntryKind::Income, id).unwrap().value,
            Decimal::MAX
        );
    }

    #[test]
    fn test_insert_authored_keeps_id_and_advances_counter() {
        let mut store = planned(LedgerConfig::default());
        let entry = EntryDraft::new("Imported", dec!(10)).into_entry(EntryId::new(41));

        store
            .insert_authored(Period::Monthly, EntryKind::Income, entry.clone())
            .unwrap();
        let next = store
            .add_entry(Period::Monthly, EntryKind::Income, EntryDraft::new("New", dec!(1)))
            .unwrap();

        assert_eq!(next, EntryId::new(42));
        assert!(matches!(
            store.insert_authored(Period::Daily, EntryKind::Income, entry),
            Err(LedgerError::DuplicateEntry(_))
        ));
    }

    #[test]
    fn test_realized_store_ids_start_high() {
        let mut store = LedgerStore::new(LedgerKind::Realized, LedgerConfig::default());
        let id = store
            .add_entry(Period::Monthly, EntryKind::Expense, EntryDraft::new("Paid", dec!(1)))
            .unwrap();
        assert_eq!(id, EntryId::new(1_000_000_000));
    }

    #[test]
    fn test_enabling_linking_rebuilds_derived() {
        let mut store = planned(LedgerConfig::default());
        let id = store
            .add_entry(Period::Daily, EntryKind::Expense, EntryDraft::new("Snack", dec!(2)))
            .unwrap();

        store.set_settings(linked());

        assert_eq!(
            store.entry(Period::Monthly, EntryKind::Expense, id).unwrap().value,
            dec!(60)
        );
        assert_eq!(store.len(), 4);
    }
}
