use super::*;

// =============================================================
// Directory shape
// =============================================================

#[test]
fn directory_lists_ten_services() {
    assert_eq!(support_resources().len(), 10);
}

#[test]
fn crisis_band_contains_exactly_the_pinned_services() {
    let names: Vec<_> = immediate_help().iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "Samaritans",
            "NHS Urgent Mental Health Helpline",
            "National Suicide Prevention Helpline UK",
        ]
    );
}

#[test]
fn crisis_and_other_partition_the_directory() {
    assert_eq!(immediate_help().len() + other_support().len(), support_resources().len());
    for pinned in immediate_help() {
        assert!(!other_support().iter().any(|r| r.name == pinned.name));
    }
}

#[test]
fn samaritans_number_matches_the_helpline() {
    let samaritans = support_resources().iter().find(|r| r.name == "Samaritans");
    assert_eq!(samaritans.and_then(|r| r.phone), Some("116 123"));
}

#[test]
fn web_only_services_have_no_phone() {
    for name in ["We Are With You", "Change Grow Live (CGL)"] {
        let service = support_resources().iter().find(|r| r.name == name);
        assert_eq!(service.and_then(|r| r.phone), None);
    }
}
