//! Mobile bottom tab bar.

use leptos::prelude::*;

use crate::state::nav::{NavState, View};

/// Which tab a view lights up. The resources tab stays active across the
/// whole resources section, including articles, the quiz and the hub.
fn active_tab(view: View) -> View {
    match view {
        View::Resources | View::Article | View::Quiz | View::MindfulDrinking => View::Resources,
        View::Support => View::Support,
        _ => View::Search,
    }
}

#[component]
pub fn BottomNav() -> impl IntoView {
    let nav = expect_context::<Memo<NavState>>();

    let tab = move |target: View, label: &'static str, icon: &'static str| {
        let class = move || {
            if active_tab(nav.get().view) == target {
                "bottom-nav__tab bottom-nav__tab--active"
            } else {
                "bottom-nav__tab"
            }
        };
        view! {
            <a class=class href=NavState::to(target).href()>
                <svg
                    class="bottom-nav__icon"
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    aria-hidden="true"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d=icon/>
                </svg>
                <span class="bottom-nav__label">{label}</span>
            </a>
        }
    };

    view! {
        <nav class="bottom-nav" aria-label="Main">
            {tab(
                View::Search,
                "Search",
                "M21 21l-5.197-5.197m0 0A7.5 7.5 0 105.196 5.196a7.5 7.5 0 0010.607 10.607z",
            )}
            {tab(
                View::Resources,
                "Resources",
                "M12 6.042A8.967 8.967 0 006 3.75c-1.052 0-2.062.18-3 .512v14.25A8.987 8.987 0 016 18c2.305 0 4.408.867 6 2.292m0-14.25a8.966 8.966 0 016-2.292c1.052 0 2.062.18 3 .512v14.25A8.987 8.987 0 0018 18a8.967 8.967 0 00-6 2.292m0-14.25v14.25",
            )}
            {tab(
                View::Support,
                "Support",
                "M21 8.25c0-2.485-2.099-4.5-4.688-4.5-1.935 0-3.597 1.126-4.312 2.733-.715-1.607-2.377-2.733-4.313-2.733C5.1 3.75 3 5.765 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12z",
            )}
        </nav>
    }
}
