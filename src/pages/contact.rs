//! The feedback and contact form.
//!
//! Submission is simulated: the form is the skeleton app's feedback
//! surface and never talks to a backend. A prefill set by another screen
//! (bug report, business inquiry, designer credit) is consumed once on
//! mount; the router clears it when the user navigates away.

use leptos::prelude::*;

use crate::state::contact::{self, Prefill};
use crate::state::nav::{NavState, View};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Sending,
    Submitted,
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let prefill = expect_context::<RwSignal<Option<Prefill>>>();

    let initial = prefill.get_untracked().unwrap_or_default();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let category = RwSignal::new(initial.category.clone());
    let message = RwSignal::new(initial.initial_message());
    let status = RwSignal::new(Status::Idle);

    // Manually switching category swaps in that category's template.
    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        message.set(contact::template(&value).unwrap_or_default().to_owned());
        category.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty()
            || email.get().trim().is_empty()
            || category.get().is_empty()
            || message.get().trim().is_empty()
        {
            alert("Please fill out all fields, including the feedback category.");
            return;
        }
        status.set(Status::Sending);
        log::info!("contact form submitted (simulation), category {}", category.get());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
            status.set(Status::Submitted);
        });
        #[cfg(not(feature = "hydrate"))]
        status.set(Status::Submitted);
    };

    let sending = move || status.get() == Status::Sending;

    move || {
        if status.get() == Status::Submitted {
            return view! {
                <div class="page page--narrow contact__thanks">
                    <h2 class="contact__thanks-heading">"Thank You!"</h2>
                    <p class="contact__thanks-text">
                        "Your message has been sent. We appreciate your feedback."
                    </p>
                    <div class="page__back">
                        <a class="btn btn--secondary" href="/">
                            "← Back"
                        </a>
                    </div>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="page page--narrow">
                <div class="page__header">
                    <h2 class="page__heading">"Feedback & Contact"</h2>
                    <p class="page__subheading">
                        "We value your input! Whether you have a suggestion, found a bug, or just want to say hello, use the form below."
                    </p>
                </div>
                <form class="contact__form" on:submit=on_submit>
                    <label class="contact__label" for="contact-name">
                        "Name"
                    </label>
                    <input
                        id="contact-name"
                        class="contact__field"
                        type="text"
                        placeholder="Your Name"
                        prop:value=move || name.get()
                        disabled=sending
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="contact__label" for="contact-email">
                        "Email"
                    </label>
                    <input
                        id="contact-email"
                        class="contact__field"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        disabled=sending
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="contact__label" for="contact-category">
                        "Category"
                    </label>
                    <select
                        id="contact-category"
                        class="contact__field"
                        prop:value=move || category.get()
                        disabled=sending
                        on:change=on_category
                    >
                        <option value="" disabled selected=move || category.get().is_empty()>
                            "Select a category..."
                        </option>
                        {contact::CATEGORIES
                            .iter()
                            .map(|&(value, label)| {
                                view! {
                                    <option value=value selected=move || category.get() == value>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <label class="contact__label" for="contact-message">
                        "Message"
                    </label>
                    <textarea
                        id="contact-message"
                        class="contact__field contact__message"
                        rows="5"
                        placeholder="Please provide as much detail as possible..."
                        prop:value=move || message.get()
                        disabled=sending
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <div class="contact__actions">
                        <a class="btn btn--secondary" href="/">
                            "← Back"
                        </a>
                        <button class="btn btn--primary contact__submit" type="submit" disabled=sending>
                            {move || if sending() { "Sending..." } else { "Send Message" }}
                        </button>
                    </div>
                </form>
                <p class="contact__smallprint">
                    "For urgent support, please visit our "
                    <a class="contact__smallprint-link" href=NavState::to(View::Support).href()>
                        "Support page"
                    </a>
                    ". This form is for general feedback only and is not monitored 24/7. By submitting, you agree to our "
                    <a class="contact__smallprint-link" href=NavState::to(View::Privacy).href()>
                        "Privacy Policy"
                    </a> "."
                </p>
            </div>
        }
        .into_any()
    }
}

fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
