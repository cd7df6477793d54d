//! Monthly attendance statistics.
//!
//! Groups processed attendance records into one summary per labor company,
//! with a row per person holding day cells and monthly totals.

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::info;

use crate::models::{CompanyMonthlySummary, DailyEntry, PersonMonthlySummary, ProcessedAttendance};

/// Builds the monthly attendance statistics for every company.
///
/// Companies are returned in ascending name order and records without a
/// company are skipped. Within a company, people keep the order in which
/// they first appear. The report month of a company is the month of its
/// earliest record.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{summarize_by_company, ShiftEngine};
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let engine = ShiftEngine::default();
/// let records = vec![AttendanceRecord {
///     person: "Li Si".to_string(),
///     company: "Acme".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     start_time: "20:00".to_string(),
///     end_time: "08:00".to_string(),
/// }];
///
/// let summaries = summarize_by_company(&engine.process_batch(&records));
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].month, 3);
/// assert_eq!(summaries[0].people[0].allowance_total, Decimal::from(10));
/// ```
pub fn summarize_by_company(records: &[ProcessedAttendance]) -> Vec<CompanyMonthlySummary> {
    let mut by_company: BTreeMap<&str, Vec<&ProcessedAttendance>> = BTreeMap::new();
    for record in records.iter().filter(|r| !r.company.is_empty()) {
        by_company
            .entry(record.company.as_str())
            .or_default()
            .push(record);
    }

    let summaries: Vec<CompanyMonthlySummary> = by_company
        .into_iter()
        .filter_map(|(company, company_records)| summarize_company(company, &company_records))
        .collect();

    info!(
        records = records.len(),
        companies = summaries.len(),
        "Built monthly attendance statistics"
    );
    summaries
}

fn summarize_company(
    company: &str,
    records: &[&ProcessedAttendance],
) -> Option<CompanyMonthlySummary> {
    let earliest = records.iter().map(|r| r.date).min()?;

    let mut people: Vec<PersonMonthlySummary> = Vec::new();
    for record in records {
        let index = match people.iter().position(|p| p.person == record.person) {
            Some(index) => index,
            None => {
                let sequence = u32::try_from(people.len() + 1).unwrap_or(u32::MAX);
                people.push(PersonMonthlySummary::new(sequence, &record.person, company));
                people.len() - 1
            }
        };

        people[index].add_entry(
            record.date.day(),
            DailyEntry {
                effective_hours: record.effective_hours,
                is_night_shift: record.is_night_shift,
                allowance_amount: record.allowance_amount,
            },
        );
    }

    Some(CompanyMonthlySummary {
        company: company.to_string(),
        year: earliest.year(),
        month: earliest.month(),
        people,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ShiftEngine;
    use crate::models::AttendanceRecord;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(person: &str, company: &str, day: u32, start: &str, end: &str) -> AttendanceRecord {
        AttendanceRecord {
            person: person.to_string(),
            company: company.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn summarize(records: &[AttendanceRecord]) -> Vec<CompanyMonthlySummary> {
        summarize_by_company(&ShiftEngine::default().process_batch(records))
    }

    #[test]
    fn test_ms_001_companies_sorted_by_name() {
        let summaries = summarize(&[
            record("Zhang", "Beta", 1, "08:00", "17:00"),
            record("Li", "Alpha", 1, "08:00", "17:00"),
        ]);

        let companies: Vec<&str> = summaries.iter().map(|s| s.company.as_str()).collect();
        assert_eq!(companies, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_ms_002_people_in_first_appearance_order() {
        let summaries = summarize(&[
            record("Wang", "Acme", 2, "08:00", "17:00"),
            record("Zhang", "Acme", 1, "08:00", "17:00"),
            record("Wang", "Acme", 1, "08:00", "17:00"),
        ]);

        let people = &summaries[0].people;
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].person, "Wang");
        assert_eq!(people[0].sequence, 1);
        assert_eq!(people[1].person, "Zhang");
        assert_eq!(people[1].sequence, 2);
    }

    #[test]
    fn test_ms_003_multiple_check_ins_one_attendance_day() {
        let summaries = summarize(&[
            record("Zhang", "Acme", 4, "06:00", "10:00"),
            record("Zhang", "Acme", 4, "13:00", "16:00"),
        ]);

        let row = &summaries[0].people[0];
        assert_eq!(row.attendance_days, 1);
        // 4h (rule 2) + 3h - 0.5h (rule 3)
        assert_eq!(row.total_effective_hours, dec("6.5"));
        assert_eq!(summaries[0].max_entries_per_day(4), 2);
    }

    #[test]
    fn test_ms_004_allowance_totals() {
        let summaries = summarize(&[
            record("Li", "Acme", 1, "20:00", "08:00"),
            record("Li", "Acme", 2, "20:00", "07:30"),
            record("Li", "Acme", 3, "19:30", "08:30"),
        ]);

        let row = &summaries[0].people[0];
        assert_eq!(row.attendance_days, 3);
        assert_eq!(row.allowance_count, 1);
        assert_eq!(row.allowance_total, dec("10"));
        assert_eq!(summaries[0].allowance_total(), dec("10"));
    }

    #[test]
    fn test_ms_005_period_from_earliest_record() {
        let records = vec![
            AttendanceRecord {
                date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                ..record("Zhang", "Acme", 1, "08:00", "17:00")
            },
            AttendanceRecord {
                date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
                ..record("Zhang", "Acme", 1, "08:00", "17:00")
            },
        ];

        let summaries = summarize(&records);
        assert_eq!(summaries[0].year, 2026);
        assert_eq!(summaries[0].month, 2);
    }

    #[test]
    fn test_ms_006_records_without_company_skipped() {
        let summaries = summarize(&[
            record("Zhang", "", 1, "08:00", "17:00"),
            record("Li", "Acme", 1, "08:00", "17:00"),
        ]);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].people.len(), 1);
    }

    #[test]
    fn test_ms_007_invalid_shift_counts_as_attendance_with_zero_hours() {
        let summaries = summarize(&[record("Zhang", "Acme", 9, "", "17:00")]);

        let row = &summaries[0].people[0];
        assert_eq!(row.attendance_days, 1);
        assert_eq!(row.total_effective_hours, Decimal::ZERO);
    }

    #[test]
    fn test_ms_008_empty_input() {
        assert!(summarize_by_company(&[]).is_empty());
    }
}
