//! First-visit welcome modal.

use leptos::prelude::*;

/// Shown once, on the first visit, until dismissed. The caller records the
/// dismissal so the modal never returns on this device.
#[component]
pub fn WelcomeModal(on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="welcome-title">
                <h2 class="modal__title" id="welcome-title">
                    "Welcome!"
                </h2>
                <p class="modal__body">
                    "Quickly find late-night services like off-licences, food, and transport, all open now."
                </p>
                <p class="modal__body">
                    "We also provide discreet access to confidential support resources, should you ever need them."
                </p>
                <p class="modal__tagline">"Your choice, no judgment."</p>
                <button class="btn btn--primary modal__dismiss" on:click=move |_| on_dismiss.run(())>
                    "Got It"
                </button>
            </div>
        </div>
    }
}
