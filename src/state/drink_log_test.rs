use super::*;

// =============================================================
// Counting
// =============================================================

#[test]
fn increments_accumulate_per_day() {
    let mut log = DrinkLog::default();
    log.increment("2026-08-28");
    log.increment("2026-08-28");
    log.increment("2026-08-29");
    assert_eq!(log.count("2026-08-28"), 2);
    assert_eq!(log.count("2026-08-29"), 1);
    assert_eq!(log.count("2026-08-27"), 0);
}

#[test]
fn decrement_never_goes_negative() {
    let mut log = DrinkLog::default();
    log.decrement("2026-08-29");
    assert_eq!(log.count("2026-08-29"), 0);

    log.increment("2026-08-29");
    log.decrement("2026-08-29");
    log.decrement("2026-08-29");
    assert_eq!(log.count("2026-08-29"), 0);
}

// =============================================================
// Weekly summaries
// =============================================================

fn week() -> Vec<String> {
    (22..=28).map(|d| format!("2026-08-{d:02}")).collect()
}

#[test]
fn counts_follow_the_requested_date_order() {
    let mut log = DrinkLog::default();
    log.increment("2026-08-22");
    log.increment("2026-08-25");
    log.increment("2026-08-25");
    let counts = log.counts_for(&week());
    assert_eq!(counts, vec![1, 0, 0, 2, 0, 0, 0]);
    assert_eq!(weekly_total(&counts), 3);
}

#[test]
fn savings_count_only_drink_free_days() {
    let counts = vec![1, 0, 0, 2, 0, 0, 0];
    assert!((money_saved(&counts, 5.00) - 25.00).abs() < f64::EPSILON);
    assert!((money_saved(&counts, 0.0)).abs() < f64::EPSILON);
}

// =============================================================
// Storage shape
// =============================================================

#[test]
fn log_serializes_as_a_plain_date_map() {
    let mut log = DrinkLog::default();
    log.increment("2026-08-29");
    let json = serde_json::to_string(&log).unwrap();
    assert_eq!(json, r#"{"2026-08-29":1}"#);

    let parsed: DrinkLog = serde_json::from_str(r#"{"2026-08-28":3}"#).unwrap();
    assert_eq!(parsed.count("2026-08-28"), 3);
}

#[test]
fn settings_keep_the_camel_case_storage_key() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert_eq!(json, r#"{"avgDrinkPrice":5.0}"#);

    let parsed: Settings = serde_json::from_str(r#"{"avgDrinkPrice":3.5}"#).unwrap();
    assert!((parsed.avg_drink_price - 3.5).abs() < f64::EPSILON);
}
