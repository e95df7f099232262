//! # nightowl
//!
//! Leptos + WASM single-page app for finding late-night services (shops,
//! food, cashpoints, transport) via outbound maps links, alongside
//! addiction/mental-health support content, a private on-device drink
//! tracker, a reflection quiz, and the "Beacon" support chat.
//!
//! The app keeps no server-side state: the ssr binary only renders and
//! serves the page, and everything the user records stays in browser
//! `localStorage`.

pub mod app;
pub mod chat;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
