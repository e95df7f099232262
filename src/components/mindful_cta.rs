//! Mindful Drinking Hub call-out card.

use leptos::prelude::*;

use crate::state::nav::{NavState, View};

#[component]
pub fn MindfulDrinkingCta() -> impl IntoView {
    view! {
        <div class="mindful-cta">
            <svg
                class="mindful-cta__icon"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M12 2a6 6 0 00-6 6c0 4.418 4.477 10 6 12 1.523-2 6-7.582 6-12a6 6 0 00-6-6z"
                />
            </svg>
            <div class="mindful-cta__copy">
                <h3 class="mindful-cta__title">"Explore the Mindful Drinking Hub"</h3>
                <p class="mindful-cta__text">
                    "Discover resources, take a private quiz, and learn strategies to build a healthier relationship with alcohol."
                </p>
            </div>
            <a class="btn btn--teal" href=NavState::to(View::MindfulDrinking).href()>
                "Learn More"
            </a>
        </div>
    }
}
