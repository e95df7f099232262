use super::*;

// =============================================================
// Maps search URLs
// =============================================================

#[test]
fn maps_url_joins_query_and_location_with_near() {
    let url = search_url(SearchKind::Maps, "off licence open now", "Manchester Piccadilly");
    assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
    assert!(url.contains("off%20licence%20open%20now%20near%20Manchester%20Piccadilly"));
}

#[test]
fn maps_url_percent_encodes_reserved_characters() {
    let url = search_url(SearchKind::Maps, "atm open now", "King's Cross & Euston");
    assert!(!url.contains('\''));
    assert!(!url[MAPS_SEARCH_BASE.len()..].contains('&'));
    assert!(url.contains("%26"));
}

#[test]
fn maps_url_handles_postcode_locations() {
    let url = search_url(SearchKind::Maps, "takeaway food open now", "SW1A 0AA");
    assert!(url.ends_with("takeaway%20food%20open%20now%20near%20SW1A%200AA"));
}

// =============================================================
// Flights search URLs
// =============================================================

#[test]
fn flights_url_uses_flights_endpoint_without_near() {
    let url = search_url(SearchKind::Flights, "flights from", "London");
    assert!(url.starts_with("https://www.google.com/flights?q="));
    assert!(url.contains("flights%20from%20London"));
    assert!(!url.contains("near"));
}

#[test]
fn open_external_is_a_no_op_outside_the_browser() {
    open_external("https://example.com/");
}
