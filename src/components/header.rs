//! Site header with the brand mark and desktop navigation.

use leptos::prelude::*;

use crate::state::nav::{APP_NAME, NavState, View};

/// Top bar. The brand links home; the nav links are hidden on small
/// screens, where [`BottomNav`](crate::components::bottom_nav::BottomNav)
/// takes over.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/" aria-label="Go to search">
                    <svg
                        class="site-header__moon"
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill="currentColor"
                        aria-hidden="true"
                    >
                        <path d="M9.528 1.718a.75.75 0 01.162.819A8.97 8.97 0 009 6a9 9 0 009 9 8.97 8.97 0 003.463-.69.75.75 0 01.981.98 10.503 10.503 0 01-9.694 6.46c-5.799 0-10.5-4.701-10.5-10.5 0-4.368 2.667-8.112 6.46-9.694a.75.75 0 01.818.162z"/>
                    </svg>
                    <span class="site-header__title">{APP_NAME}</span>
                </a>
                <nav class="site-header__nav" aria-label="Primary">
                    <a class="site-header__link" href=NavState::to(View::Resources).href()>
                        "Resources"
                    </a>
                    <a class="site-header__link" href=NavState::to(View::Support).href()>
                        "Support"
                    </a>
                    <a class="site-header__link" href=NavState::to(View::Contact).href()>
                        "Contact Us"
                    </a>
                </nav>
            </div>
        </header>
    }
}
