//! Monthly attendance statistics models.
//!
//! These are the per-company, per-person rows behind the monthly attendance
//! statistics sheet.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

/// One shift's contribution to a day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    /// Effective hours of the shift (2 dp).
    pub effective_hours: Decimal,
    /// Whether the shift was a night shift.
    pub is_night_shift: bool,
    /// Night allowance earned by the shift.
    pub allowance_amount: Decimal,
}

/// Monthly totals for one person at one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonMonthlySummary {
    /// 1-based position in first-appearance order.
    pub sequence: u32,
    /// Name of the person.
    pub person: String,
    /// Labor company.
    pub company: String,
    /// Entries by day of month, in input order within a day.
    pub daily: BTreeMap<u32, Vec<DailyEntry>>,
    /// Distinct days with at least one entry.
    pub attendance_days: u32,
    /// Sum of effective hours across all entries.
    pub total_effective_hours: Decimal,
    /// Number of entries that earned a night allowance.
    pub allowance_count: u32,
    /// Sum of night allowances.
    pub allowance_total: Decimal,
}

impl PersonMonthlySummary {
    /// Creates an empty summary row.
    pub fn new(sequence: u32, person: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            sequence,
            person: person.into(),
            company: company.into(),
            daily: BTreeMap::new(),
            attendance_days: 0,
            total_effective_hours: Decimal::ZERO,
            allowance_count: 0,
            allowance_total: Decimal::ZERO,
        }
    }

    /// Adds one shift on the given day and updates the totals.
    pub fn add_entry(&mut self, day: u32, entry: DailyEntry) {
        self.total_effective_hours += entry.effective_hours;
        if entry.allowance_amount > Decimal::ZERO {
            self.allowance_count += 1;
            self.allowance_total += entry.allowance_amount;
        }

        let entries = self.daily.entry(day).or_default();
        if entries.is_empty() {
            self.attendance_days += 1;
        }
        entries.push(entry);
    }
}

/// Monthly attendance statistics for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyMonthlySummary {
    /// Labor company.
    pub company: String,
    /// Report year, taken from the earliest record.
    pub year: i32,
    /// Report month, taken from the earliest record.
    pub month: u32,
    /// One row per person, in first-appearance order.
    pub people: Vec<PersonMonthlySummary>,
}

impl CompanyMonthlySummary {
    /// Returns the most entries any person has on `day`.
    ///
    /// Zero means nobody worked that day.
    pub fn max_entries_per_day(&self, day: u32) -> usize {
        self.people
            .iter()
            .filter_map(|p| p.daily.get(&day).map(Vec::len))
            .max()
            .unwrap_or(0)
    }

    /// Returns the sum of night allowances across all people.
    pub fn allowance_total(&self) -> Decimal {
        self.people.iter().map(|p| p.allowance_total).sum()
    }
}
