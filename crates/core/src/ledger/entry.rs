//! Ledger entry domain types.

use finplan_shared::types::{EntryId, parse_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::{Period, convert};

/// Income or expense side of a period's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Income entry.
    #[serde(rename = "receitas")]
    Income,
    /// Expense entry.
    #[serde(rename = "despesas")]
    Expense,
}

impl EntryKind {
    /// Both kinds, income first.
    pub const ALL: [Self; 2] = [Self::Income, Self::Expense];
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => f.write_str("receitas"),
            Self::Expense => f.write_str("despesas"),
        }
    }
}

/// Which of the two parallel ledgers a store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    /// Intended or budgeted entries.
    Planned,
    /// Entries that actually occurred.
    Realized,
}

impl LedgerKind {
    /// First id handed out by a store of this kind.
    ///
    /// The ranges are disjoint so an entry can be copied from the planned
    /// store into the realized one keeping its id.
    #[must_use]
    pub const fn first_id(self) -> u64 {
        match self {
            Self::Planned => 1,
            Self::Realized => 1_000_000_000,
        }
    }
}

/// A planned or realized income/expense line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Unique identifier within its store.
    pub id: EntryId,
    /// Free text.
    pub description: String,
    /// Non-negative amount.
    pub value: Decimal,
    /// Optional category label.
    pub expense_type: Option<String>,
    /// Year locator.
    pub year: Option<i32>,
    /// Month locator (1-12).
    pub month: Option<u32>,
    /// Week of month locator (1-5).
    pub week: Option<u32>,
    /// Day of week locator (0-6).
    pub day_of_week: Option<u32>,
    /// True for copies propagated from a smaller period.
    pub is_fixed: bool,
    /// Originating period of a derived copy.
    pub source_period: Option<Period>,
}

impl LedgerEntry {
    /// Returns true if this entry was authored rather than propagated.
    #[must_use]
    pub const fn is_authored(&self) -> bool {
        !self.is_fixed
    }

    /// Builds the derived copy of this entry for a larger period.
    #[must_use]
    pub fn derived_copy(&self, from: Period, to: Period) -> Self {
        Self {
            value: convert(self.value, from, to),
            is_fixed: true,
            source_period: Some(from),
            ..self.clone()
        }
    }

    /// Returns true if the entry carries the given year, or no year at all.
    #[must_use]
    pub fn in_year(&self, year: i32) -> bool {
        self.year.is_none_or(|y| y == year)
    }
}

/// User input for a new entry. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    /// Free text.
    pub description: String,
    /// Non-negative amount.
    pub value: Decimal,
    /// Optional category label.
    pub expense_type: Option<String>,
    /// Year locator.
    pub year: Option<i32>,
    /// Month locator (1-12).
    pub month: Option<u32>,
    /// Week of month locator (1-5).
    pub week: Option<u32>,
    /// Day of week locator (0-6).
    pub day_of_week: Option<u32>,
}

impl EntryDraft {
    /// Creates a draft with a description and value and no locators.
    #[must_use]
    pub fn new(description: impl Into<String>, value: Decimal) -> Self {
        Self {
            description: description.into(),
            value,
            ..Self::default()
        }
    }

    /// Creates a draft from user-typed text.
    ///
    /// The amount is parsed leniently: anything that is not a non-negative
    /// number becomes zero.
    #[must_use]
    pub fn from_input(description: impl Into<String>, raw_value: &str) -> Self {
        Self::new(description, parse_amount(raw_value))
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.expense_type = Some(category.into());
        self
    }

    /// Sets the year and month locators.
    #[must_use]
    pub const fn in_month(mut self, year: i32, month: u32) -> Self {
        self.year = Some(year);
        self.month = Some(month);
        self
    }

    /// Sets the week-of-month locator.
    #[must_use]
    pub const fn in_week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }

    /// Sets the day-of-week locator.
    #[must_use]
    pub const fn on_day(mut self, day_of_week: u32) -> Self {
        self.day_of_week = Some(day_of_week);
        self
    }

    pub(crate) fn into_entry(self, id: EntryId) -> LedgerEntry {
        LedgerEntry {
            id,
            description: self.description,
            value: self.value,
            expense_type: self.expense_type,
            year: self.year,
            month: self.month,
            week: self.week,
            day_of_week: self.day_of_week,
            is_fixed: false,
            source_period: None,
        }
    }
}

/// Partial update of an authored entry. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    /// New description.
    pub description: Option<String>,
    /// New value.
    pub value: Option<Decimal>,
    /// New category label.
    pub expense_type: Option<String>,
    /// New year.
    pub year: Option<i32>,
    /// New month.
    pub month: Option<u32>,
    /// New week of month.
    pub week: Option<u32>,
    /// New day of week.
    pub day_of_week: Option<u32>,
}

impl EntryPatch {
    /// Returns a copy of `entry` with the patch applied.
    #[must_use]
    pub fn apply_to(&self, entry: &LedgerEntry) -> LedgerEntry {
        let mut patched = entry.clone();
        if let Some(description) = &self.description {
            patched.description.clone_from(description);
        }
        if let Some(value) = self.value {
            patched.value = value;
        }
        if let Some(expense_type) = &self.expense_type {
            patched.expense_type = Some(expense_type.clone());
        }
        patched.year = self.year.or(patched.year);
        patched.month = self.month.or(patched.month);
        patched.week = self.week.or(patched.week);
        patched.day_of_week = self.day_of_week.or(patched.day_of_week);
        patched
    }
}
