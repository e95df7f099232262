use super::*;

// =============================================================
// Weekday labels
// =============================================================

#[test]
fn weekday_letters_cover_a_known_week() {
    // 2024-01-01 was a Monday.
    assert_eq!(weekday_letter("2024-01-01"), 'M');
    assert_eq!(weekday_letter("2024-01-02"), 'T');
    assert_eq!(weekday_letter("2024-01-03"), 'W');
    assert_eq!(weekday_letter("2024-01-04"), 'T');
    assert_eq!(weekday_letter("2024-01-05"), 'F');
    assert_eq!(weekday_letter("2024-01-06"), 'S');
    assert_eq!(weekday_letter("2024-01-07"), 'S');
}

#[test]
fn weekday_handles_january_and_february_of_leap_years() {
    // 2024-02-29 was a Thursday.
    assert_eq!(weekday_letter("2024-02-29"), 'T');
    // 2000-01-01 was a Saturday.
    assert_eq!(weekday_letter("2000-01-01"), 'S');
}

#[test]
fn malformed_dates_get_a_placeholder() {
    assert_eq!(weekday_letter("not-a-date"), '?');
    assert_eq!(weekday_letter("2024-13-01"), '?');
    assert_eq!(weekday_letter(""), '?');
}

// =============================================================
// Server-side fallbacks
// =============================================================

#[test]
fn trailing_week_always_has_seven_entries() {
    assert_eq!(trailing_week().len(), 7);
}

#[test]
fn today_is_well_formed() {
    let today = today();
    assert_eq!(today.len(), 10);
    assert_eq!(today.as_bytes()[4], b'-');
    assert_eq!(today.as_bytes()[7], b'-');
}
