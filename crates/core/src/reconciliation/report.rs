//! Planned vs realized reconciliation report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::selector::Selector;
use super::variance::{CategoryVariance, by_category};
use super::view::{SelectedEntries, monthly_total, select, variance};
use crate::ledger::{EntryKind, LedgerStore};
use crate::period::Period;

/// Totals of one store under a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// Income total for the period.
    pub income: Decimal,
    /// Expense total for the period.
    pub expenses: Decimal,
    /// Initial capital plus income minus expenses.
    pub balance: Decimal,
    /// Income converted to a monthly figure.
    pub monthly_income: Decimal,
    /// Expenses converted to a monthly figure.
    pub monthly_expenses: Decimal,
}

impl LedgerSummary {
    fn from_selection(selection: &SelectedEntries<'_>, period: Period, initial_capital: Decimal) -> Self {
        let income = selection.income_total();
        let expenses = selection.expense_total();
        Self {
            income,
            expenses,
            balance: selection.balance(initial_capital),
            monthly_income: monthly_total(income, period),
            monthly_expenses: monthly_total(expenses, period),
        }
    }
}

/// Planned and realized figures side by side, with variances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    /// Period reconciled.
    pub period: Period,
    /// Selector used.
    pub selector: Selector,
    /// Planned totals.
    pub planned: LedgerSummary,
    /// Realized totals.
    pub realized: LedgerSummary,
    /// Realized minus planned income.
    pub income_variance: Decimal,
    /// Realized minus planned expenses.
    pub expense_variance: Decimal,
    /// Per-category variances, income first.
    pub categories: Vec<CategoryVariance>,
}

impl ReconciliationReport {
    /// Reconciles `planned` against `realized` for one period and selector.
    #[must_use]
    pub fn build(
        planned: &LedgerStore,
        realized: &LedgerStore,
        period: Period,
        selector: Selector,
        initial_capital: Decimal,
    ) -> Self {
        let planned_entries = select(planned, period, &selector);
        let realized_entries = select(realized, period, &selector);

        let planned_summary = LedgerSummary::from_selection(&planned_entries, period, initial_capital);
        let realized_summary = LedgerSummary::from_selection(&realized_entries, period, initial_capital);

        let mut categories = Vec::new();
        for kind in EntryKind::ALL {
            categories.extend(by_category(
                kind,
                planned_entries.get(kind),
                realized_entries.get(kind),
            ));
        }

        debug!(
            %period,
            year = selector.year,
            month = ?selector.month,
            categories = categories.len(),
            "Reconciliation report built"
        );

        Self {
            period,
            selector,
            income_variance: variance(planned_summary.income, realized_summary.income),
            expense_variance: variance(planned_summary.expenses, realized_summary.expenses),
            planned: planned_summary,
            realized: realized_summary,
            categories,
        }
    }

    /// Realized balance minus planned balance.
    #[must_use]
    pub fn balance_variance(&self) -> Decimal {
        variance(self.planned.balance, self.realized.balance)
    }
}
