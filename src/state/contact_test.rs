use super::*;

// =============================================================
// Templates
// =============================================================

#[test]
fn every_listed_category_has_a_template() {
    for (value, _) in CATEGORIES {
        assert!(template(value).is_some(), "missing template for {value}");
    }
}

#[test]
fn unknown_category_has_no_template() {
    assert_eq!(template(""), None);
    assert_eq!(template("complaint"), None);
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn explicit_message_wins_over_the_template() {
    let prefill = Prefill {
        category: "suggestion".to_owned(),
        message: Some("custom".to_owned()),
    };
    assert_eq!(prefill.initial_message(), "custom");
}

#[test]
fn missing_message_falls_back_to_the_category_template() {
    let prefill = Prefill { category: "question".to_owned(), message: None };
    assert_eq!(prefill.initial_message(), "Hi, I have a question about the app:\n\n");
}

#[test]
fn unknown_category_without_message_yields_empty_text() {
    let prefill = Prefill { category: "mystery".to_owned(), message: None };
    assert_eq!(prefill.initial_message(), "");
}

#[test]
fn bug_report_prefill_embeds_error_and_details() {
    let prefill = Prefill::bug_report("Couldn't get your location.", "GeolocationPositionError");
    assert_eq!(prefill.category, "bug_report");
    let message = prefill.initial_message();
    assert!(message.contains("Error Message:\nCouldn't get your location."));
    assert!(message.contains("Technical Details:\nGeolocationPositionError"));
    assert!(message.ends_with("Steps to reproduce (optional):\n"));
}

#[test]
fn business_inquiry_prefill_targets_the_listing_flow() {
    let prefill = Prefill::business_inquiry();
    assert_eq!(prefill.category, "business_inquiry");
    assert!(prefill.initial_message().contains("Business Name:"));
}
