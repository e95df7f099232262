//! The Mindful Drinking Hub: tracker, chart, savings and craving tool.
//!
//! Everything on this dashboard is private to the device. The log and
//! settings are loaded from localStorage on mount and written back on
//! every change, best-effort.

use leptos::prelude::*;

use crate::components::share_button::ShareButton;
use crate::state::drink_log::{self, DrinkLog, Settings};
use crate::state::nav::{NavState, View};
use crate::util;
use crate::util::dates;
use crate::util::storage::{self, DRINK_LOG_KEY, SETTINGS_KEY};

const BREATHER_SECONDS: u32 = 60;

#[component]
pub fn MindfulDrinkingPage() -> impl IntoView {
    let log = RwSignal::new(DrinkLog::default());
    let settings = RwSignal::new(Settings::default());
    let show_breather = RwSignal::new(false);
    let show_settings = RwSignal::new(false);

    // Rehydrate device state once the browser is driving.
    Effect::new(move || {
        if let Some(stored) = storage::load_json::<DrinkLog>(DRINK_LOG_KEY) {
            log.set(stored);
        }
        if let Some(stored) = storage::load_json::<Settings>(SETTINGS_KEY) {
            settings.set(stored);
        }
    });

    let change_today = move |increment: bool| {
        log.update(|l| {
            let today = dates::today();
            if increment {
                l.increment(&today);
            } else {
                l.decrement(&today);
            }
        });
        storage::save_json(DRINK_LOG_KEY, &log.get_untracked());
    };

    let today_count = move || log.get().count(&dates::today());
    let week = move || {
        let dates = dates::trailing_week();
        let counts = log.get().counts_for(&dates);
        dates
            .iter()
            .map(|d| dates::weekday_letter(d))
            .zip(counts)
            .collect::<Vec<_>>()
    };
    let weekly_total = move || drink_log::weekly_total(&log.get().counts_for(&dates::trailing_week()));
    let saved = move || {
        let counts = log.get().counts_for(&dates::trailing_week());
        drink_log::money_saved(&counts, settings.get().avg_drink_price)
    };

    let share_url = Signal::derive(move || {
        NavState::to(View::MindfulDrinking).share_url(&util::origin())
    });

    view! {
        <div class="page page--hub">
            <BreatherModal visible=show_breather/>
            <SettingsModal visible=show_settings settings=settings/>

            <div class="page__header">
                <div class="page__heading-row">
                    <h2 class="page__heading">"Mindful Drinking Hub"</h2>
                    <ShareButton
                        title="Mindful Drinking Hub"
                        text="I found this useful hub with a private tracker and tools for mindful drinking."
                            .to_owned()
                        url=share_url
                        label="Share this page"
                    />
                </div>
                <p class="page__subheading">"Your private dashboard for building healthier habits."</p>
            </div>

            <div class="hub__grid">
                <div class="hub-card hub-card--wide">
                    <h3 class="hub-card__title">"Today's Drinks"</h3>
                    <p class="hub-card__hint">"Log your drinks here. It's completely private."</p>
                    <div class="hub-card__tracker">
                        <button
                            class="hub-card__step"
                            on:click=move |_| change_today(false)
                            disabled=move || today_count() == 0
                            aria-label="Remove a drink"
                        >
                            "−"
                        </button>
                        <span class="hub-card__count">{today_count}</span>
                        <button
                            class="hub-card__step"
                            on:click=move |_| change_today(true)
                            aria-label="Add a drink"
                        >
                            "+"
                        </button>
                    </div>
                </div>

                <div class="hub-card hub-card--wide">
                    <div class="hub-card__title-row">
                        <h3 class="hub-card__title">"This Week"</h3>
                        <p class="hub-card__hint">{move || format!("{} total", weekly_total())}</p>
                    </div>
                    <div class="hub-chart">
                        {move || {
                            let week = week();
                            // Floor of 3 keeps low weeks from rendering
                            // full-height bars.
                            let max = week.iter().map(|(_, c)| *c).max().unwrap_or(0).max(3);
                            week.into_iter()
                                .map(|(day, count)| {
                                    let height = f64::from(count) / f64::from(max) * 100.0;
                                    view! {
                                        <div class="hub-chart__column">
                                            <div class="hub-chart__well">
                                                <div
                                                    class="hub-chart__bar"
                                                    style:height=format!("{height}%")
                                                    title=format!("{count} drinks")
                                                ></div>
                                            </div>
                                            <span class="hub-chart__day">{day}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="hub-card">
                    <div class="hub-card__title-row">
                        <h3 class="hub-card__title">"Money Saved"</h3>
                        <button
                            class="hub-card__settings"
                            on:click=move |_| show_settings.set(true)
                            aria-label="Savings settings"
                        >
                            "⚙"
                        </button>
                    </div>
                    <p class="hub-card__hint">"Based on drink-free days this week."</p>
                    <p class="hub-card__savings">{move || format!("~£{:.2}", saved())}</p>
                </div>

                <div class="hub-card hub-card--center">
                    <h3 class="hub-card__title">"Mindful Check-in"</h3>
                    <p class="hub-card__hint">"A private quiz to reflect on your habits."</p>
                    <a class="hub-card__link" href=NavState::to(View::Quiz).href()>
                        "Start the Quiz →"
                    </a>
                </div>

                <div class="hub-card hub-card--urge">
                    <h3 class="hub-card__title">"Feeling an Urge?"</h3>
                    <p class="hub-card__hint">"Use this tool to guide you through the moment."</p>
                    <button class="btn btn--light" on:click=move |_| show_breather.set(true)>
                        "Take a Breather"
                    </button>
                </div>

                <div class="hub-card hub-card--center hub-card--wide">
                    <h3 class="hub-card__title">"Helpful Reading"</h3>
                    <p class="hub-card__hint">"Understand cravings and build strategies."</p>
                    <a
                        class="hub-card__link"
                        href=NavState::article("understanding-alcohol-cravings").href()
                    >
                        "Learn About Cravings →"
                    </a>
                </div>
            </div>

            <div class="page__back">
                <a class="btn btn--secondary" href=NavState::to(View::Resources).href()>
                    "← Back"
                </a>
            </div>
        </div>
    }
}

/// Guided-breathing overlay: a one-minute countdown with an in/out cue
/// that flips at the halfway mark.
#[component]
fn BreatherModal(visible: RwSignal<bool>) -> impl IntoView {
    let remaining = RwSignal::new(BREATHER_SECONDS);

    Effect::new(move || {
        if !visible.get() {
            return;
        }
        remaining.set(BREATHER_SECONDS);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            while visible.get_untracked() && remaining.get_untracked() > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                remaining.update(|r| *r = r.saturating_sub(1));
            }
        });
    });

    view! {
        <Show when=move || visible.get()>
            <div class="breather">
                <div class="breather__circle">
                    <p class="breather__clock">
                        {move || {
                            let t = remaining.get();
                            format!("{}:{:02}", t / 60, t % 60)
                        }}
                    </p>
                </div>
                <p class="breather__cue">
                    {move || {
                        if remaining.get() > BREATHER_SECONDS / 2 {
                            "Breathe in deeply..."
                        } else {
                            "Breathe out slowly..."
                        }
                    }}
                </p>
                <p class="breather__hint">
                    "Focus on the sensation of your breath. This feeling will pass."
                </p>
                <button class="btn btn--secondary" on:click=move |_| visible.set(false)>
                    "Close"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn SettingsModal(visible: RwSignal<bool>, settings: RwSignal<Settings>) -> impl IntoView {
    let price_input = RwSignal::new(String::new());

    Effect::new(move || {
        if visible.get() {
            price_input.set(format!("{:.2}", settings.get_untracked().avg_drink_price));
        }
    });

    let on_save = move |_| {
        if let Ok(price) = price_input.get().trim().parse::<f64>() {
            if price >= 0.0 {
                settings.set(Settings { avg_drink_price: price });
                storage::save_json(SETTINGS_KEY, &settings.get_untracked());
                visible.set(false);
            }
        }
    };

    view! {
        <Show when=move || visible.get()>
            <div class="modal-backdrop" on:click=move |_| visible.set(false)>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal__title-row">
                        <h3 class="modal__title">"Settings"</h3>
                        <button
                            class="modal__close"
                            on:click=move |_| visible.set(false)
                            aria-label="Close settings"
                        >
                            "×"
                        </button>
                    </div>
                    <label class="modal__label" for="drink-price">
                        "Average Price per Drink (£)"
                    </label>
                    <input
                        id="drink-price"
                        class="modal__field"
                        type="number"
                        step="0.10"
                        min="0"
                        prop:value=move || price_input.get()
                        on:input=move |ev| price_input.set(event_target_value(&ev))
                    />
                    <p class="modal__smallprint">
                        "Used to estimate your savings. This is stored only on your device."
                    </p>
                    <button class="btn btn--primary modal__save" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </div>
        </Show>
    }
}
