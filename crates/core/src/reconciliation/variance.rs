//! Planned vs realized variance per category.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{EntryKind, LedgerEntry};

/// Whether a variance helps or hurts the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Less spent or more earned than planned.
    Favorable,
    /// More spent or less earned than planned.
    Unfavorable,
    /// Exactly on plan.
    OnTarget,
}

/// Planned vs realized totals of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryVariance {
    /// Category label; `None` groups uncategorized entries.
    pub category: Option<String>,
    /// Income or expense.
    pub kind: EntryKind,
    /// Planned total.
    pub planned: Decimal,
    /// Realized total.
    pub realized: Decimal,
    /// `realized - planned`.
    pub variance: Decimal,
    /// Variance as a percentage of plan, 2 dp. Zero when nothing was planned.
    pub variance_percent: Decimal,
    /// Effect on the plan.
    pub status: VarianceStatus,
}

impl CategoryVariance {
    /// Calculates the variance of one category.
    ///
    /// For expenses, spending over plan is unfavorable.
    /// For income, earning over plan is favorable.
    #[must_use]
    pub fn new(category: Option<String>, kind: EntryKind, planned: Decimal, realized: Decimal) -> Self {
        let variance = realized.saturating_sub(planned);

        let status = match (variance.cmp(&Decimal::ZERO), kind) {
            (std::cmp::Ordering::Equal, _) => VarianceStatus::OnTarget,
            (std::cmp::Ordering::Greater, EntryKind::Income)
            | (std::cmp::Ordering::Less, EntryKind::Expense) => VarianceStatus::Favorable,
            _ => VarianceStatus::Unfavorable,
        };

        let variance_percent = if planned.is_zero() {
            Decimal::ZERO
        } else {
            variance
                .checked_div(planned)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map_or_else(
                    || {
                        if variance.is_sign_negative() == planned.is_sign_negative() {
                            Decimal::MAX
                        } else {
                            Decimal::MIN
                        }
                    },
                    |percent| percent.round_dp(2),
                )
        };

        Self {
            category,
            kind,
            planned,
            realized,
            variance,
            variance_percent,
            status,
        }
    }
}

/// Groups both sides by category and computes each variance.
///
/// Categories appearing on only one side get zero on the other. Output is
/// sorted by category, uncategorized first.
#[must_use]
pub fn by_category(
    kind: EntryKind,
    planned: &[&LedgerEntry],
    realized: &[&LedgerEntry],
) -> Vec<CategoryVariance> {
    let mut groups: BTreeMap<Option<&str>, (Decimal, Decimal)> = BTreeMap::new();

    for entry in planned {
        let totals = groups.entry(entry.expense_type.as_deref()).or_default();
        totals.0 = totals.0.saturating_add(entry.value);
    }
    for entry in realized {
        let totals = groups.entry(entry.expense_type.as_deref()).or_default();
        totals.1 = totals.1.saturating_add(entry.value);
    }

    groups
        .into_iter()
        .map(|(category, (planned, realized))| {
            CategoryVariance::new(category.map(str::to_string), kind, planned, realized)
        })
        .collect()
}
