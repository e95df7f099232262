//! The search screen: the app's landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::mindful_cta::MindfulDrinkingCta;
use crate::components::searching::start_search;
use crate::components::share_button::ShareButton;
use crate::state::contact::Prefill;
use crate::state::nav::{NavState, View};
use crate::state::search::DeferredSearch;
use crate::util;
use crate::util::geolocation;
use crate::util::maps::{self, SearchKind};

#[derive(Clone, Copy, PartialEq, Eq)]
struct Category {
    name: &'static str,
    query: &'static str,
    kind: SearchKind,
    description: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category {
        name: "Off-Licences",
        query: "off licence open now",
        kind: SearchKind::Maps,
        description: "Find off-licences and convenience stores open late near you.",
    },
    Category {
        name: "Late Food",
        query: "takeaway food open now",
        kind: SearchKind::Maps,
        description: "Get hot food, takeaways, and groceries delivered to your door.",
    },
    Category {
        name: "Cashpoints",
        query: "atm open now",
        kind: SearchKind::Maps,
        description: "Locate ATMs and cash machines that are accessible now.",
    },
    Category {
        name: "Hotels",
        query: "hotels available tonight",
        kind: SearchKind::Maps,
        description: "Book a room for tonight with immediate availability.",
    },
    Category {
        name: "Flights",
        query: "flights from",
        kind: SearchKind::Flights,
        description: "Search for last-minute flights from your nearest airport.",
    },
    Category {
        name: "Rides",
        query: "taxi service now",
        kind: SearchKind::Maps,
        description: "Find taxis, private hire, and ride-sharing services available now.",
    },
];

const DEFAULT_DESCRIPTION: &str =
    "Find off-licences, food, transport and more, available right now.";

/// Address autocomplete is deliberately disabled (the upstream suggestion
/// service was rate-limited); the input plumbing stays wired so re-enabling
/// it is a one-line change.
async fn address_suggestions(_query: &str) -> Vec<String> {
    Vec::new()
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let deferred = expect_context::<RwSignal<DeferredSearch>>();
    let prefill = expect_context::<RwSignal<Option<Prefill>>>();
    let geo_error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let location = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<String>::new());
    let getting_location = RwSignal::new(false);
    let location_missing = RwSignal::new(false);
    let selected = RwSignal::new(None::<&'static str>);
    let pending = RwSignal::new(None::<Category>);

    let execute = move |category: Category, loc: &str| {
        let url = maps::search_url(category.kind, category.query, loc.trim());
        start_search(deferred, url, category.name.to_owned());
    };

    let pick_category = move |category: Category| {
        selected.set(Some(category.name));
        let loc = location.get();
        if loc.trim().is_empty() {
            location_missing.set(true);
            pending.set(Some(category));
            return;
        }
        execute(category, &loc);
    };

    // A search picked before a location was entered fires as soon as one
    // arrives (typed or from geolocation).
    Effect::new(move || {
        let loc = location.get();
        if loc.trim().is_empty() {
            return;
        }
        if let Some(category) = pending.get() {
            pending.set(None);
            execute(category, &loc);
        }
    });

    let on_location_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        location.set(value.clone());
        location_missing.set(false);
        if value.len() > 2 {
            leptos::task::spawn_local(async move {
                suggestions.set(address_suggestions(&value).await);
            });
        } else {
            suggestions.set(Vec::new());
        }
    };

    let on_use_my_location = move |_| {
        getting_location.set(true);
        geo_error.set(None);
        geolocation::locate(move |result| {
            getting_location.set(false);
            match result {
                Ok(coords) => location.set(coords),
                Err(message) => geo_error.set(Some(message)),
            }
        });
    };

    let on_business = move |_| {
        prefill.set(Some(Prefill::business_inquiry()));
        navigate(&NavState::to(View::Contact).href(), Default::default());
    };

    let description = move || {
        selected
            .get()
            .and_then(|name| CATEGORIES.iter().find(|c| c.name == name))
            .map_or(DEFAULT_DESCRIPTION, |c| c.description)
    };

    let category_buttons = CATEGORIES
        .iter()
        .map(|&category| {
            let class = move || {
                if selected.get() == Some(category.name) {
                    "search__category search__category--selected"
                } else {
                    "search__category"
                }
            };
            view! {
                <button class=class on:click=move |_| pick_category(category)>
                    <span class="search__category-name">{category.name}</span>
                </button>
            }
        })
        .collect_view();

    let app_share_url = Signal::derive(|| {
        let origin = util::origin();
        if origin.is_empty() { "/".to_owned() } else { origin }
    });

    view! {
        <div class="page page--search">
            <h2 class="search__heading">
                "Find what you need, " <span class="search__heading-accent">"tonight."</span>
            </h2>
            <p class="search__tagline">"Your 24/7 guide to what's open nearby."</p>
            <p class="search__hint">
                "Enter your location to find late-night services open near you."
            </p>

            <div class="search__location-row">
                <input
                    class=move || {
                        if location_missing.get() {
                            "search__location-input search__location-input--error"
                        } else {
                            "search__location-input"
                        }
                    }
                    type="text"
                    placeholder="e.g., 'Manchester Piccadilly' or 'SW1A 0AA'"
                    prop:value=move || location.get()
                    on:input=on_location_input
                />
                <button
                    class="btn btn--secondary search__locate"
                    on:click=on_use_my_location
                    disabled=move || getting_location.get()
                >
                    {move || if getting_location.get() { "Finding..." } else { "Use My Location" }}
                </button>
            </div>
            <Show when=move || location_missing.get()>
                <p class="search__validation" role="alert">
                    "Please enter a location first."
                </p>
            </Show>
            {move || {
                geo_error
                    .get()
                    .map(|message| {
                        view! {
                            <p class="search__validation" role="alert">
                                {message}
                            </p>
                        }
                    })
            }}
            <Show when=move || !suggestions.get().is_empty()>
                <ul class="search__suggestions">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|suggestion| {
                                let value = suggestion.clone();
                                view! {
                                    <li>
                                        <button
                                            class="search__suggestion"
                                            on:click=move |_| {
                                                location.set(value.clone());
                                                suggestions.set(Vec::new());
                                            }
                                        >
                                            {suggestion}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>

            <div class="search__categories">
                <p class="search__categories-label">"What are you looking for?"</p>
                <p class="search__description">{description}</p>
                <div class="search__grid">{category_buttons}</div>
            </div>

            <div class="search__business">
                <p>
                    "Are you a business owner? "
                    <button class="search__business-link" on:click=on_business>
                        "Promote your business with us."
                    </button>
                </p>
            </div>

            <div class="search__extras">
                <MindfulDrinkingCta/>
                <ShareButton
                    title="Off Licence Near Me - Find Late-Night Shops & Support"
                    text="Found this useful app for finding things open late at night. It also has support resources."
                        .to_owned()
                    url=app_share_url
                    label="Share this app"
                />
            </div>
        </div>
    }
}
