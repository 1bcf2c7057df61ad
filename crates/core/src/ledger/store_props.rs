//! Property-based tests for LedgerStore.
//!
//! - Propagation only flows to strictly larger periods
//! - Derived copies cannot be edited
//! - Failed mutations leave the store unchanged
//! - Derived state is fully recomputable from authored entries

use finplan_shared::config::LedgerConfig;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::{EntryDraft, EntryKind, EntryPatch, LedgerKind};
use super::error::LedgerError;
use super::store::LedgerStore;
use crate::period::{Period, convert};

/// Strategy to generate non-negative amounts (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn period_strategy() -> impl Strategy<Value = Period> {
    prop_oneof![
        Just(Period::Daily),
        Just(Period::Weekly),
        Just(Period::Monthly),
        Just(Period::Annual),
    ]
}

fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![Just(EntryKind::Income), Just(EntryKind::Expense)]
}

fn linked() -> LedgerConfig {
    LedgerConfig {
        link_periods: true,
        ..LedgerConfig::default()
    }
}

proptest! {
    /// Derived copies appear in every strictly larger period and nowhere else.
    #[test]
    fn prop_propagation_only_upward(
        period in period_strategy(),
        kind in kind_strategy(),
        value in amount(),
    ) {
        let mut store = LedgerStore::new(LedgerKind::Planned, linked());
        let id = store.add_entry(period, kind, EntryDraft::new("x", value)).unwrap();

        for other in Period::ALL {
            let found = store.entry(other, kind, id);
            if other < period {
                prop_assert!(found.is_none());
            } else if other == period {
                prop_assert!(!found.unwrap().is_fixed);
            } else {
                let copy = found.unwrap();
                prop_assert!(copy.is_fixed);
                prop_assert_eq!(copy.source_period, Some(period));
                prop_assert_eq!(copy.value, convert(value, period, other));
            }
        }
    }

    /// Editing a derived copy never changes the store.
    #[test]
    fn prop_derived_edit_is_noop(
        kind in kind_strategy(),
        value in amount(),
        new_value in amount(),
    ) {
        let mut store = LedgerStore::new(LedgerKind::Planned, linked());
        let id = store.add_entry(Period::Daily, kind, EntryDraft::new("x", value)).unwrap();
        let before = store.clone();

        let patch = EntryPatch { value: Some(new_value), ..EntryPatch::default() };
        for period in [Period::Weekly, Period::Monthly, Period::Annual] {
            let result = store.update_entry(id, period, kind, &patch);
            let is_derived_error = matches!(result, Err(LedgerError::DerivedEntryNotEditable { .. }));
            prop_assert!(is_derived_error);
        }
        prop_assert_eq!(store, before);
    }

    /// Out-of-range reorders are abandoned without touching the store.
    #[test]
    fn prop_bad_reorder_is_atomic(
        count in 0usize..5,
        from in 0usize..8,
        to in 0usize..8,
    ) {
        let mut store = LedgerStore::new(LedgerKind::Planned, LedgerConfig::default());
        for i in 0..count {
            store
                .add_entry(Period::Monthly, EntryKind::Expense, EntryDraft::new(format!("e{i}"), Decimal::ONE))
                .unwrap();
        }
        let before = store.clone();

        let result = store.reorder(Period::Monthly, EntryKind::Expense, from, to);

        if from < count && to < count {
            prop_assert!(result.is_ok());
            prop_assert_eq!(store.entries(Period::Monthly, EntryKind::Expense).len(), count);
        } else {
            let is_range_error = matches!(result, Err(LedgerError::IndexOutOfRange { .. }));
            prop_assert!(is_range_error);
            prop_assert_eq!(store, before);
        }
    }

    /// Rebuilding derived state reproduces exactly the linked state.
    #[test]
    fn prop_derived_state_recomputable(
        drafts in prop::collection::vec((period_strategy(), kind_strategy(), amount()), 0..12),
    ) {
        let mut store = LedgerStore::new(LedgerKind::Planned, linked());
        for (period, kind, value) in drafts {
            store.add_entry(period, kind, EntryDraft::new("x", value)).unwrap();
        }

        let mut rebuilt = store.clone();
        rebuilt.rebuild_derived();

        for period in Period::ALL {
            for kind in EntryKind::ALL {
                let mut expected: Vec<_> = store.entries(period, kind).to_vec();
                let mut actual: Vec<_> = rebuilt.entries(period, kind).to_vec();
                expected.sort_by_key(|e| e.id);
                actual.sort_by_key(|e| e.id);
                prop_assert_eq!(expected, actual);
            }
        }
    }

    /// Linked removal clears the id from every period.
    #[test]
    fn prop_linked_removal_everywhere(
        period in period_strategy(),
        kind in kind_strategy(),
        value in amount(),
    ) {
        let mut store = LedgerStore::new(LedgerKind::Planned, linked());
        let id = store.add_entry(period, kind, EntryDraft::new("x", value)).unwrap();

        store.remove_entry(id, period, kind).unwrap();

        prop_assert!(store.is_empty());
    }
}
