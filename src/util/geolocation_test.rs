use super::*;

// =============================================================
// Error mapping
// =============================================================

#[test]
fn each_position_error_code_gets_a_distinct_message() {
    let denied = failure_message(1);
    let unavailable = failure_message(2);
    let timed_out = failure_message(3);
    assert_ne!(denied, unavailable);
    assert_ne!(unavailable, timed_out);
    assert_ne!(denied, timed_out);
}

#[test]
fn unknown_codes_fall_back_to_a_generic_message() {
    assert!(failure_message(0).contains("location"));
    assert!(failure_message(99).contains("location"));
}

// =============================================================
// Coordinate formatting
// =============================================================

#[test]
fn coords_format_matches_the_location_input() {
    assert_eq!(format_coords(53.4808, -2.2426), "53.4808, -2.2426");
}

#[test]
fn locate_reports_unsupported_outside_the_browser() {
    let mut result = None;
    locate(|r| result = Some(r));
    assert_eq!(result, Some(Err(UNSUPPORTED_MESSAGE.to_owned())));
}

#[test]
fn failure_messages_land_in_the_inline_error_slot() {
    // The search screen keeps the inline geolocation error as an
    // Option<String>; the callback's Err arm must fill it directly.
    let mut inline_error = None::<String>;
    locate(|result| {
        if let Err(message) = result {
            inline_error = Some(message);
        }
    });
    assert_eq!(inline_error.as_deref(), Some(UNSUPPORTED_MESSAGE));
}
