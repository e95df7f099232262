//! Share button backed by the Web Share API, with a clipboard fallback.

use leptos::prelude::*;

/// Opens the device share sheet for `url` when the browser offers one;
/// otherwise copies the link and confirms with an alert.
#[component]
pub fn ShareButton(
    title: &'static str,
    text: String,
    url: Signal<String>,
    /// Accessible label, e.g. "Share this article".
    #[prop(default = "Share")]
    label: &'static str,
) -> impl IntoView {
    let on_click = move |_| {
        share(title, &text, &url.get());
    };

    view! {
        <button class="btn btn--ghost share-button" on:click=on_click aria-label=label>
            <svg
                class="share-button__icon"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M7.217 10.907a2.25 2.25 0 100 2.186m0-2.186c.18.324.283.696.283 1.093s-.103.77-.283 1.093m0-2.186l9.566-5.314m-9.566 7.5l9.566 5.314m0 0a2.25 2.25 0 103.935 2.186 2.25 2.25 0 00-3.935-2.186zm0-12.814a2.25 2.25 0 103.933-2.185 2.25 2.25 0 00-3.933 2.185z"
                />
            </svg>
            <span class="share-button__text">"Share"</span>
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn share(title: &str, text: &str, url: &str) {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    let has_share = js_sys::Reflect::has(&navigator, &JsValue::from_str("share"))
        .unwrap_or(false);
    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title(title);
        data.set_text(text);
        data.set_url(url);
        // Dismissing the share sheet rejects the promise; nothing to do.
        let promise = navigator.share_with_data(&data);
        leptos::task::spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
        return;
    }

    let promise = navigator.clipboard().write_text(url);
    leptos::task::spawn_local(async move {
        if JsFuture::from(promise).await.is_ok() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Link copied to clipboard!");
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn share(_title: &str, _text: &str, _url: &str) {}
