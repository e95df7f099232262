//! Outbound search URL construction for the external maps provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Search" in this app is URL construction only: we hand the user's query
//! and location to the external maps (or flights) site in a new browsing
//! context. No request is made from our code.

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";
const FLIGHTS_SEARCH_BASE: &str = "https://www.google.com/flights?q=";

/// How a category's query is turned into an external URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchKind {
    /// Maps place search: `query near <location>`.
    #[default]
    Maps,
    /// Flights search: `query <location>`.
    Flights,
}

/// Build the outbound URL for a category query and a user-entered location.
pub fn search_url(kind: SearchKind, query: &str, location: &str) -> String {
    match kind {
        SearchKind::Maps => {
            let q = format!("{query} near {location}");
            format!("{MAPS_SEARCH_BASE}{}", urlencoding::encode(&q))
        }
        SearchKind::Flights => {
            let q = format!("{query} {location}");
            format!("{FLIGHTS_SEARCH_BASE}{}", urlencoding::encode(&q))
        }
    }
}

/// Open `url` in a new browsing context. No-op outside the browser.
pub fn open_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
