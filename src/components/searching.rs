//! The deferred-search overlay and its timer.

use leptos::prelude::*;

use crate::state::search::DeferredSearch;
#[cfg(feature = "hydrate")]
use crate::state::search::SEARCH_DELAY_MS;
#[cfg(feature = "hydrate")]
use crate::util::maps;

/// Arm the deferred search and start its single-shot timer. If another
/// search is armed before the timer fires, this timer's generation token
/// goes stale and firing it opens nothing.
pub fn start_search(deferred: RwSignal<DeferredSearch>, url: String, category: String) {
    let token = deferred
        .try_update(|d| d.arm(url, category))
        .unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SEARCH_DELAY_MS)))
            .await;
        let fired = deferred.try_update(|d| d.fire(token)).flatten();
        if let Some(pending) = fired {
            maps::open_external(&pending.url);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = token;
}

/// Full-screen interstitial shown while a search is armed.
#[component]
pub fn SearchingOverlay() -> impl IntoView {
    let deferred = expect_context::<RwSignal<DeferredSearch>>();

    let category = move || deferred.get().category().unwrap_or("services").to_owned();
    let on_cancel = move |_| deferred.update(DeferredSearch::cancel);

    view! {
        <div class="searching">
            <div class="searching__spinner" aria-hidden="true"></div>
            <h2 class="searching__heading">
                {move || format!("Searching for {}...", category())}
            </h2>
            <p class="searching__subheading">"Taking you to the results in a new tab."</p>
            <button class="btn btn--ghost" on:click=on_cancel>
                "Cancel"
            </button>
        </div>
    }
}
