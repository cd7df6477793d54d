//! Integration tests for the attendance engine.
//!
//! This test suite covers:
//! - Reference day and night shift scenarios
//! - Midday window deduction priority
//! - Spreadsheet time serials and plain hour cells
//! - Unparsable cells
//! - Policy loaded from `config/attendance`
//! - Monthly attendance statistics across companies
//! - JSON output consumed by the report writer

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use attendance_engine::calculation::{ShiftEngine, summarize_by_company};
use attendance_engine::config::{ConfigLoader, EngineConfig};
use attendance_engine::error::EngineError;
use attendance_engine::models::{AttendanceRecord, ProcessedAttendance, ShiftKind};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_engine() -> ShiftEngine {
    let config = ConfigLoader::load("./config/attendance").expect("Failed to load config");
    ShiftEngine::from_loader(&config)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn create_record(person: &str, company: &str, date: &str, start: &str, end: &str) -> AttendanceRecord {
    AttendanceRecord {
        person: person.to_string(),
        company: company.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn process(start: &str, end: &str) -> ProcessedAttendance {
    create_engine().process_record(&create_record("Zhang San", "Acme Labor", "2026-03-02", start, end))
}

fn assert_hours(result: &ProcessedAttendance, total: &str, effective: &str) {
    assert_eq!(
        result.total_hours,
        decimal(total),
        "Expected total_hours {}, got {}",
        total,
        result.total_hours
    );
    assert_eq!(
        result.effective_hours,
        decimal(effective),
        "Expected effective_hours {}, got {}",
        effective,
        result.effective_hours
    );
}

// =============================================================================
// SECTION 1: Reference scenarios
// =============================================================================

#[test]
fn test_day_shift_ending_at_window_close() {
    // Rule 4 (end <= 17:00) is checked before rule 5
    let result = process("08:00", "17:00");

    assert_eq!(result.shift_kind, ShiftKind::Day);
    assert_hours(&result, "9", "8.5");
    assert_eq!(result.allowance_amount, Decimal::ZERO);
}

#[test]
fn test_night_shift_exactly_at_allowance_threshold() {
    let result = process("20:00", "08:00");

    assert_eq!(result.shift_kind, ShiftKind::Night);
    assert!(result.is_night_shift);
    assert_hours(&result, "12", "11.5");
    assert_eq!(result.allowance_amount, decimal("10"));
}

#[test]
fn test_night_shift_below_allowance_threshold() {
    let result = process("20:00", "07:30");

    assert_eq!(result.shift_kind, ShiftKind::Night);
    assert_hours(&result, "11.5", "11");
    assert_eq!(result.allowance_amount, Decimal::ZERO);
}

#[test]
fn test_short_night_shift() {
    let result = process("22:00", "06:00");

    assert_eq!(result.shift_kind, ShiftKind::Night);
    assert_hours(&result, "8", "7.5");
    assert_eq!(result.allowance_amount, Decimal::ZERO);
}

#[test]
fn test_late_day_start_uses_rule_3_not_rule_5() {
    let result = process("12:00", "18:00");

    assert_eq!(result.shift_kind, ShiftKind::Day);
    assert_hours(&result, "6", "5.5");
}

#[test]
fn test_full_day_across_midday_window() {
    let result = process("07:00", "19:00");

    assert_eq!(result.shift_kind, ShiftKind::Day);
    assert_hours(&result, "12", "11");
}

#[test]
fn test_unparsable_start_is_invalid_with_zeros() {
    let result = process("", "17:00");

    assert_eq!(result.shift_kind, ShiftKind::Invalid);
    assert_hours(&result, "0", "0");
    assert_eq!(result.allowance_amount, Decimal::ZERO);
    assert!(!result.is_night_shift);
    assert_eq!(result.start_time_formatted, "");
    assert_eq!(result.end_time_formatted, "17:00");
}

// =============================================================================
// SECTION 2: Classification boundaries
// =============================================================================

#[test]
fn test_evening_wrap_before_20_is_day_shift() {
    let result = process("19:00", "02:00");

    assert_eq!(result.shift_kind, ShiftKind::Day);
    // Rule 1: start after 17:00, no deduction
    assert_hours(&result, "7", "7");
}

#[test]
fn test_early_morning_wrap_is_night_shift() {
    let result = process("07:00", "06:30");

    assert_eq!(result.shift_kind, ShiftKind::Night);
    assert_hours(&result, "23.5", "23");
    assert_eq!(result.allowance_amount, decimal("10"));
}

// =============================================================================
// SECTION 3: Cell formats
// =============================================================================

#[test]
fn test_spreadsheet_serial_times() {
    // 0.875 of a day = 21:00, 0.375 = 09:00
    let result = process("0.875", "0.375");

    assert_eq!(result.start_time_formatted, "21:00");
    assert_eq!(result.end_time_formatted, "09:00");
    assert_eq!(result.shift_kind, ShiftKind::Night);
    assert_hours(&result, "12", "11.5");
    assert_eq!(result.allowance_amount, decimal("10"));
}

#[test]
fn test_plain_hour_cells() {
    let result = process("8", "17");

    assert_eq!(result.start_time_formatted, "08:00");
    assert_hours(&result, "9", "8.5");
}

#[test]
fn test_plain_hour_above_day_is_not_wrapped() {
    // "25" stays 25.0, which classifies as night
    let result = process("25", "08:00");

    assert_eq!(result.shift_kind, ShiftKind::Night);
    assert_eq!(result.start_time_formatted, "01:00");
}

#[test]
fn test_unpadded_times_are_normalized() {
    let result = process("8:5", "16:45");

    assert_eq!(result.start_time_formatted, "08:05");
    assert_eq!(result.end_time_formatted, "16:45");
    assert_eq!(result.start_time, "8:5");
}

// =============================================================================
// SECTION 4: Configuration
// =============================================================================

#[test]
fn test_shipped_policy_equals_default_engine() {
    let loaded = create_engine();
    assert_eq!(loaded.config(), &EngineConfig::default());
}

#[test]
fn test_missing_config_reports_policy_path() {
    match ConfigLoader::load("./config/does-not-exist") {
        Err(EngineError::ConfigNotFound { path }) => assert!(path.ends_with("policy.yaml")),
        other => panic!("Expected ConfigNotFound, got {:?}", other),
    }
}

#[test]
fn test_custom_policy_changes_threshold() {
    let config: EngineConfig = serde_yaml::from_str(
        r#"
night_allowance:
  rate: "12.5"
  min_effective_hours: "7"
"#,
    )
    .unwrap();
    let engine = ShiftEngine::from_loader(&ConfigLoader::from_config(config).unwrap());

    let shift = engine.calculate_shift("22:00", "06:00");
    assert_eq!(shift.allowance_amount, decimal("12.5"));
}

// =============================================================================
// SECTION 5: Monthly statistics
// =============================================================================

#[test]
fn test_monthly_statistics_across_companies() {
    let engine = create_engine();
    let records = vec![
        create_record("Zhang San", "Beta Labor", "2026-03-01", "08:00", "17:00"),
        create_record("Li Si", "Acme Labor", "2026-03-01", "20:00", "08:00"),
        create_record("Li Si", "Acme Labor", "2026-03-02", "20:00", "08:30"),
        create_record("Wang Wu", "Acme Labor", "2026-03-02", "06:00", "10:00"),
        create_record("Wang Wu", "Acme Labor", "2026-03-02", "13:00", "18:00"),
        create_record("Zhao Liu", "", "2026-03-02", "08:00", "17:00"),
    ];

    let summaries = summarize_by_company(&engine.process_batch(&records));

    assert_eq!(summaries.len(), 2);
    let acme = &summaries[0];
    assert_eq!(acme.company, "Acme Labor");
    assert_eq!((acme.year, acme.month), (2026, 3));
    assert_eq!(acme.people.len(), 2);

    let li = &acme.people[0];
    assert_eq!(li.person, "Li Si");
    assert_eq!(li.attendance_days, 2);
    assert_eq!(li.total_effective_hours, decimal("23.5"));
    assert_eq!(li.allowance_count, 2);
    assert_eq!(li.allowance_total, decimal("20"));

    let wang = &acme.people[1];
    assert_eq!(wang.attendance_days, 1);
    assert_eq!(wang.total_effective_hours, decimal("8.5"));
    assert_eq!(acme.max_entries_per_day(2), 2);
    assert_eq!(acme.max_entries_per_day(1), 1);

    assert_eq!(summaries[1].company, "Beta Labor");
}

// =============================================================================
// SECTION 6: JSON output
// =============================================================================

#[test]
fn test_processed_record_json_shape() {
    let result = process("20:00", "08:00");
    let value: Value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["person"], json!("Zhang San"));
    assert_eq!(value["date"], json!("2026-03-02"));
    assert_eq!(value["shift_kind"], json!("night"));
    assert_eq!(value["is_night_shift"], json!(true));
    assert_eq!(value["start_time_formatted"], json!("20:00"));
    assert_eq!(
        decimal(value["effective_hours"].as_str().unwrap()),
        decimal("11.5")
    );
    assert_eq!(
        decimal(value["allowance_amount"].as_str().unwrap()),
        decimal("10")
    );
}

#[test]
fn test_records_deserialize_with_missing_identity() {
    let records: Vec<AttendanceRecord> = serde_json::from_value(json!([
        {"person": "Li Si", "company": "Acme Labor", "date": "2026-03-01", "start_time": "20:00", "end_time": "08:00"},
        {"date": "2026-03-01", "start_time": "08:00"}
    ]))
    .unwrap();

    let processed = create_engine().process_batch(&records);

    assert_eq!(processed[0].allowance_amount, decimal("10"));
    assert_eq!(processed[1].person, "");
    assert_eq!(processed[1].shift_kind, ShiftKind::Invalid);
}
