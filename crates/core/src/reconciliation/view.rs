//! Filtered views over a ledger store and their aggregates.

use rust_decimal::Decimal;

use super::selector::Selector;
use crate::ledger::{EntryKind, LedgerEntry, LedgerStore};
use crate::period::{Period, monthly_equivalent};

/// Income and expense entries visible under a selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedEntries<'a> {
    /// Visible income entries, in display order.
    pub income: Vec<&'a LedgerEntry>,
    /// Visible expense entries, in display order.
    pub expenses: Vec<&'a LedgerEntry>,
}

impl SelectedEntries<'_> {
    /// Entries of one side.
    #[must_use]
    pub fn get(&self, kind: EntryKind) -> &[&LedgerEntry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    /// Sum of visible income.
    #[must_use]
    pub fn income_total(&self) -> Decimal {
        totals(self.income.iter().copied())
    }

    /// Sum of visible expenses.
    #[must_use]
    pub fn expense_total(&self) -> Decimal {
        totals(self.expenses.iter().copied())
    }

    /// `initial_capital + income - expenses`.
    #[must_use]
    pub fn balance(&self, initial_capital: Decimal) -> Decimal {
        balance(initial_capital, self.income_total(), self.expense_total())
    }
}

/// Entries of `period` visible under `selector`, both sides.
#[must_use]
pub fn select<'a>(store: &'a LedgerStore, period: Period, selector: &Selector) -> SelectedEntries<'a> {
    SelectedEntries {
        income: select_kind(store, period, EntryKind::Income, selector),
        expenses: select_kind(store, period, EntryKind::Expense, selector),
    }
}

/// Entries of one side of `period` visible under `selector`.
#[must_use]
pub fn select_kind<'a>(
    store: &'a LedgerStore,
    period: Period,
    kind: EntryKind,
    selector: &Selector,
) -> Vec<&'a LedgerEntry> {
    store
        .entries(period, kind)
        .iter()
        .filter(|entry| selector.matches(entry, period))
        .collect()
}

/// Sum of entry values.
#[must_use]
pub fn totals<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> Decimal {
    entries
        .into_iter()
        .fold(Decimal::ZERO, |acc, entry| acc.saturating_add(entry.value))
}

/// `initial_capital + income - expenses`.
#[must_use]
pub fn balance(initial_capital: Decimal, income: Decimal, expenses: Decimal) -> Decimal {
    initial_capital.saturating_add(income).saturating_sub(expenses)
}

/// `realized - planned`.
#[must_use]
pub fn variance(planned: Decimal, realized: Decimal) -> Decimal {
    realized.saturating_sub(planned)
}

/// Monthly equivalent of a per-`period` total.
#[must_use]
pub fn monthly_total(total: Decimal, period: Period) -> Decimal {
    monthly_equivalent(total, period)
}
