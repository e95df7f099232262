//! Site footer: secondary navigation, legal links and the designer credit.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::contact::Prefill;
use crate::state::nav::{NavState, View};

#[component]
pub fn Footer() -> impl IntoView {
    let prefill = expect_context::<RwSignal<Option<Prefill>>>();
    let navigate = use_navigate();

    // The designer credit opens the contact form with its own category
    // preselected so the greeting template is addressed correctly.
    let on_designer = move |_| {
        prefill.set(Some(Prefill { category: "designer_contact".to_owned(), message: None }));
        navigate(&NavState::to(View::Contact).href(), Default::default());
    };

    let year = current_year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__links">
                <a class="site-footer__link" href=NavState::to(View::About).href()>
                    "About Us"
                </a>
                <a class="site-footer__link" href=NavState::to(View::Contact).href()>
                    "Contact Us"
                </a>
            </div>
            <div class="site-footer__links">
                <a class="site-footer__link" href=NavState::to(View::Privacy).href()>
                    "Privacy Policy"
                </a>
                <span class="site-footer__divider">"|"</span>
                <a class="site-footer__link" href=NavState::to(View::Terms).href()>
                    "Terms & Conditions"
                </a>
            </div>
            <p class="site-footer__copyright">
                {format!("© {year} Find Offlicence Near Me. All rights reserved.")}
            </p>
            <button class="site-footer__credit" on:click=on_designer>
                "Designed by Mark Bradshaw"
            </button>
        </footer>
    }
}

fn current_year() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // Server-rendered placeholder; hydration swaps in the device year.
        2025
    }
}
