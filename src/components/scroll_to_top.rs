//! Floating "back to top" button for long pages.

use leptos::prelude::*;

const SHOW_AFTER_PX: f64 = 300.0;

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scrolled = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            visible.set(scrolled > SHOW_AFTER_PX);
        });
        on_cleanup(move || handle.remove());
    }

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    };

    view! {
        <Show when=move || visible.get()>
            <button class="scroll-top" on:click=on_click aria-label="Scroll to top">
                <svg
                    class="scroll-top__icon"
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    aria-hidden="true"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d="M4.5 15.75l7.5-7.5 7.5 7.5"/>
                </svg>
            </button>
        </Show>
    }
}
