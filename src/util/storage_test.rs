use super::*;

// =============================================================
// Server-side (no storage) behavior
// =============================================================

#[test]
fn load_json_without_storage_yields_none() {
    let value: Option<serde_json::Value> = load_json(DRINK_LOG_KEY);
    assert!(value.is_none());
}

#[test]
fn save_json_without_storage_is_a_no_op() {
    // Must not panic or error when no browser storage exists.
    save_json(SETTINGS_KEY, &serde_json::json!({ "avgDrinkPrice": 5.0 }));
}

#[test]
fn flags_default_to_unset() {
    assert!(!read_flag(WELCOME_SEEN_KEY));
    set_flag(WELCOME_SEEN_KEY);
    // Still unset outside the browser: flags are best-effort.
    assert!(!read_flag(WELCOME_SEEN_KEY));
}

// =============================================================
// Key stability — stored data must survive app updates
// =============================================================

#[test]
fn storage_keys_are_stable() {
    assert_eq!(WELCOME_SEEN_KEY, "night-owl-nav-welcome-seen");
    assert_eq!(DRINK_LOG_KEY, "mindful-drinking-log");
    assert_eq!(SETTINGS_KEY, "mindful-drinking-settings");
}
