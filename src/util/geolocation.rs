//! One-shot browser geolocation for the search screen.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

/// Shown when the browser exposes no geolocation API at all.
pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser.";

// PositionError codes per the Geolocation API.
const PERMISSION_DENIED: u16 = 1;
const POSITION_UNAVAILABLE: u16 = 2;
const TIMEOUT: u16 = 3;

/// User-facing message for a `PositionError` code.
pub fn failure_message(code: u16) -> &'static str {
    match code {
        PERMISSION_DENIED => {
            "Location access was denied. Please allow location access for this site, or type your location instead."
        }
        POSITION_UNAVAILABLE => {
            "Couldn't get your location. Please ensure location services are enabled for your browser and try again."
        }
        TIMEOUT => "Finding your location took too long. Please try again or type your location instead.",
        _ => "Couldn't get your location. Please type it instead.",
    }
}

/// Format browser coordinates the way the location input expects them.
pub fn format_coords(latitude: f64, longitude: f64) -> String {
    format!("{latitude}, {longitude}")
}

/// Request the device position once and hand the result to `on_done`.
///
/// Success yields a "lat, lng" string ready for the location input; failure
/// yields a user-facing message. Uses a 10 second timeout with high accuracy.
#[cfg(feature = "hydrate")]
pub fn locate(on_done: impl FnOnce(Result<String, String>) + 'static) {
    use wasm_bindgen::prelude::*;

    let Some(window) = web_sys::window() else {
        on_done(Err(UNSUPPORTED_MESSAGE.to_owned()));
        return;
    };
    let Ok(geolocation) = window.navigator().geolocation() else {
        on_done(Err(UNSUPPORTED_MESSAGE.to_owned()));
        return;
    };

    // Only one of the two callbacks fires; share the completion through a
    // single-use cell so `on_done` stays FnOnce.
    let done = std::rc::Rc::new(std::cell::Cell::new(Some(on_done)));

    let success = {
        let done = done.clone();
        Closure::once(move |position: web_sys::Position| {
            if let Some(f) = done.take() {
                let coords = position.coords();
                f(Ok(format_coords(coords.latitude(), coords.longitude())));
            }
        })
    };
    let failure = {
        let done = done.clone();
        Closure::once(move |error: web_sys::PositionError| {
            if let Some(f) = done.take() {
                f(Err(failure_message(error.code()).to_owned()));
            }
        })
    };

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(10_000);

    if geolocation
        .get_current_position_with_error_callback_and_options(
            success.as_ref().unchecked_ref(),
            Some(failure.as_ref().unchecked_ref()),
            &options,
        )
        .is_err()
    {
        if let Some(f) = done.take() {
            f(Err(UNSUPPORTED_MESSAGE.to_owned()));
        }
    }

    // The API holds no reference to the closures after the one-shot call
    // returns them, so keep them alive for the browser.
    success.forget();
    failure.forget();
}

/// Server builds have no device position.
#[cfg(not(feature = "hydrate"))]
pub fn locate(on_done: impl FnOnce(Result<String, String>)) {
    on_done(Err(UNSUPPORTED_MESSAGE.to_owned()));
}
