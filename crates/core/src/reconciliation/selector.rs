//! Period and date selector for ledger views.

use serde::{Deserialize, Serialize};

use crate::ledger::LedgerEntry;
use crate::period::Period;

/// The year/month/week/day a view is focused on.
///
/// Matching is conjunctive over the fields relevant to the period. An entry
/// without a given locator matches any selector value for it, so untagged
/// entries stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    /// Year.
    pub year: i32,
    /// Month (1-12).
    pub month: Option<u32>,
    /// Week of month (1-5).
    pub week: Option<u32>,
    /// Day of week (0-6).
    pub day_of_week: Option<u32>,
}

impl Selector {
    /// Selects a whole year.
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            week: None,
            day_of_week: None,
        }
    }

    /// Narrows to a month.
    #[must_use]
    pub const fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Narrows to a week of the month.
    #[must_use]
    pub const fn week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }

    /// Narrows to a day of the week.
    #[must_use]
    pub const fn day_of_week(mut self, day_of_week: u32) -> Self {
        self.day_of_week = Some(day_of_week);
        self
    }

    /// Returns true if `entry` is visible in `period` under this selector.
    ///
    /// - ANUAL: year
    /// - MENSAL: year and month
    /// - SEMANAL: year, month and week
    /// - DIARIO: year, month and day of week
    #[must_use]
    pub fn matches(&self, entry: &LedgerEntry, period: Period) -> bool {
        let year = field_matches(entry.year, Some(self.year));
        let month = field_matches(entry.month, self.month);
        match period {
            Period::Annual => year,
            Period::Monthly => year && month,
            Period::Weekly => year && month && field_matches(entry.week, self.week),
            Period::Daily => year && month && field_matches(entry.day_of_week, self.day_of_week),
        }
    }
}

fn field_matches<T: PartialEq>(entry: Option<T>, selected: Option<T>) -> bool {
    match (entry, selected) {
        (Some(entry), Some(selected)) => entry == selected,
        _ => true,
    }
}
