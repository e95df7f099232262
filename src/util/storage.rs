//! Browser localStorage helpers for on-device persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! All persisted data (drink log, hub settings, welcome flag) lives in
//! per-origin `localStorage` and never leaves the device. Reads and writes
//! are best-effort: a quota or serialization failure is logged and the
//! caller sees the documented default instead of an error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// localStorage key for the "welcome modal seen" flag.
pub const WELCOME_SEEN_KEY: &str = "night-owl-nav-welcome-seen";
/// localStorage key for the drink log (`YYYY-MM-DD` -> count).
pub const DRINK_LOG_KEY: &str = "mindful-drinking-log";
/// localStorage key for the mindful hub settings.
pub const SETTINGS_KEY: &str = "mindful-drinking-settings";

/// Load a JSON value from `localStorage` for `key`.
///
/// Returns `None` when the key is absent, the stored value fails to parse,
/// or storage is unavailable (including on the server).
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable localStorage value for {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`. Best-effort.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize value for {key}: {e}");
                return;
            }
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to write {key} to localStorage");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Read a plain string flag. Returns `true` when the stored value is "true".
pub fn read_flag(key: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
            .is_some_and(|v| v == "true")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        false
    }
}

/// Set a plain string flag to "true". Best-effort.
pub fn set_flag(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(key, "true").is_err() {
                log::warn!("failed to write flag {key} to localStorage");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
