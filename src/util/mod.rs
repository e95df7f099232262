//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the state machines stay pure and natively testable.

pub mod dates;
pub mod geolocation;
pub mod maps;
pub mod phone;
pub mod storage;

/// `window.location.origin`, or an empty string outside the browser (share
/// URLs then degrade to in-app relative hrefs).
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
