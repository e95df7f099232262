//! Root application component: routing, shared contexts, chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_query_map;
use leptos_router::path;

use crate::components::bottom_nav::BottomNav;
use crate::components::error_display::{ErrorDisplay, ErrorReport};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::scroll_to_top::ScrollToTopButton;
use crate::components::searching::SearchingOverlay;
use crate::components::welcome_modal::WelcomeModal;
use crate::pages::about::AboutPage;
use crate::pages::article::ArticlePage;
use crate::pages::contact::ContactPage;
use crate::pages::mindful_drinking::MindfulDrinkingPage;
use crate::pages::privacy::PrivacyPage;
use crate::pages::quiz::QuizPage;
use crate::pages::resources::ResourcesPage;
use crate::pages::search::SearchPage;
use crate::pages::support::SupportPage;
use crate::pages::terms::TermsPage;
use crate::state::contact::Prefill;
use crate::state::nav::{NavState, View};
use crate::state::search::DeferredSearch;
use crate::util::storage::{self, WELCOME_SEEN_KEY};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Find off-licences, late food, cashpoints and transport open now, with discreet access to confidential support."
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: provides the shared state contexts and mounts the
/// single query-parameter route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Cross-screen shared state. Navigation state itself lives in the URL;
    // these carry everything that must outlive a single screen.
    provide_context(RwSignal::new(None::<Prefill>));
    provide_context(RwSignal::new(DeferredSearch::default()));
    provide_context(RwSignal::new(None::<ErrorReport>));

    view! {
        <Stylesheet id="leptos" href="/pkg/nightowl.css"/>

        <Router>
            <Routes fallback=Screen>
                <Route path=path!("") view=Screen/>
            </Routes>
        </Router>
    }
}

/// The one real route. Every screen is addressed by the `view`/`slug`
/// query parameters; the path itself is ignored.
#[component]
fn Screen() -> impl IntoView {
    let query = use_query_map();
    let prefill = expect_context::<RwSignal<Option<Prefill>>>();
    let deferred = expect_context::<RwSignal<DeferredSearch>>();
    let error = expect_context::<RwSignal<Option<ErrorReport>>>();

    let nav = Memo::new(move |_| {
        let query = query.get();
        NavState::from_query(query.get("view").as_deref(), query.get("slug").as_deref())
    });
    provide_context(nav);

    // Navigation side effects, shared by link clicks, programmatic pushes
    // and browser back/forward: leaving the contact view drops its prefill,
    // any real navigation dismisses a lingering error and returns to the
    // top of the page. Same-state navigations do nothing.
    let previous = RwSignal::new(NavState::home());
    Effect::new(move || {
        let current = nav.get();
        let last = previous.get_untracked();
        if current == last {
            return;
        }
        if last.view == View::Contact {
            prefill.set(None);
        }
        error.set(None);
        previous.set(current);

        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });

    // First-visit welcome modal, keyed by a localStorage flag.
    let show_welcome = RwSignal::new(false);
    Effect::new(move || {
        if !storage::read_flag(WELCOME_SEEN_KEY) {
            show_welcome.set(true);
        }
    });
    let dismiss_welcome = Callback::new(move |()| {
        show_welcome.set(false);
        storage::set_flag(WELCOME_SEEN_KEY);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    });

    let slug = Signal::derive(move || nav.get().slug);

    let content = move || {
        // The searching overlay suppresses normal rendering without
        // changing the underlying view.
        if deferred.get().is_active() {
            return view! { <SearchingOverlay/> }.into_any();
        }
        if let Some(report) = error.get() {
            return view! {
                <ErrorDisplay
                    report=report
                    on_retry=Callback::new(move |()| error.set(None))
                    retry_text="Dismiss"
                />
            }
            .into_any();
        }
        match nav.get().view {
            View::Search => view! {
                <Show when=move || show_welcome.get()>
                    <WelcomeModal on_dismiss=dismiss_welcome/>
                </Show>
                <SearchPage/>
            }
            .into_any(),
            View::Support => view! { <SupportPage/> }.into_any(),
            View::Contact => view! { <ContactPage/> }.into_any(),
            View::About => view! { <AboutPage/> }.into_any(),
            View::Privacy => view! { <PrivacyPage/> }.into_any(),
            View::Terms => view! { <TermsPage/> }.into_any(),
            View::Resources => view! { <ResourcesPage/> }.into_any(),
            View::Article => view! { <ArticlePage slug=slug/> }.into_any(),
            View::Quiz => view! { <QuizPage/> }.into_any(),
            View::MindfulDrinking => view! { <MindfulDrinkingPage/> }.into_any(),
        }
    };

    view! {
        <Title text=move || nav.get().title()/>

        <div class="app-shell">
            <Header/>
            <main class="app-shell__main">
                <ErrorBoundary fallback=|_| {
                    view! {
                        <div class="fatal">
                            <h1 class="fatal__heading">"Oops! Something went wrong."</h1>
                            <p class="fatal__text">
                                "We've encountered an unexpected error. Please try refreshing the page. If the problem persists, please contact support."
                            </p>
                            <button class="btn btn--primary" on:click=|_| reload()>
                                "Refresh Page"
                            </button>
                        </div>
                    }
                }>{content}</ErrorBoundary>
                <Footer/>
            </main>
            <BottomNav/>
            <ScrollToTopButton/>
        </div>
    }
}

fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
