use super::*;

// =============================================================
// Arming and firing
// =============================================================

#[test]
fn armed_search_fires_once_with_its_token() {
    let mut search = DeferredSearch::default();
    let token = search.arm("https://maps.example/a", "Off-Licences");
    assert!(search.is_active());
    assert_eq!(search.category(), Some("Off-Licences"));

    let fired = search.fire(token);
    assert_eq!(fired.map(|p| p.url), Some("https://maps.example/a".to_owned()));
    assert!(!search.is_active());

    // Token is spent.
    assert_eq!(search.fire(token), None);
}

#[test]
fn rearming_supersedes_the_first_search() {
    let mut search = DeferredSearch::default();
    let first = search.arm("https://maps.example/a", "Off-Licences");
    let second = search.arm("https://maps.example/b", "Late Food");

    // The first timer comes due but its generation is stale.
    assert_eq!(search.fire(first), None);
    assert!(search.is_active());

    // Exactly one external navigation results.
    let fired = search.fire(second);
    assert_eq!(fired.map(|p| p.category), Some("Late Food".to_owned()));
}

#[test]
fn cancel_invalidates_outstanding_timers() {
    let mut search = DeferredSearch::default();
    let token = search.arm("https://maps.example/a", "Rides");
    search.cancel();
    assert!(!search.is_active());
    assert_eq!(search.fire(token), None);
}

#[test]
fn fresh_machine_is_idle() {
    let mut search = DeferredSearch::default();
    assert!(!search.is_active());
    assert_eq!(search.category(), None);
    assert_eq!(search.fire(0), None);
}
