//! The UK support services directory plus the Beacon chat.

use leptos::prelude::*;

use crate::components::share_button::ShareButton;
use crate::components::support_chat::SupportChat;
use crate::content::{self, SupportResource};
use crate::state::nav::{NavState, View};
use crate::util;

#[component]
fn ResourceCard(resource: &'static SupportResource) -> impl IntoView {
    let phone_link = resource.phone.map(|phone| {
        let tel = format!("tel:{}", phone.replace(' ', ""));
        view! {
            <a
                class="resource-card__action"
                href=tel
                aria-label=format!("Call {}", resource.name)
            >
                {format!("Call {phone}")}
            </a>
        }
    });
    let contact_note = resource
        .phone
        .is_none()
        .then(|| view! { <span class="resource-card__note">"Contact via website"</span> });

    view! {
        <div class="resource-card">
            <h3 class="resource-card__name">{resource.name}</h3>
            <p class="resource-card__description">{resource.description}</p>
            <div class="resource-card__actions">
                {phone_link}
                {contact_note}
                <a
                    class="resource-card__action"
                    href=resource.website
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=format!("Visit website for {}", resource.name)
                >
                    "Website"
                </a>
                <ShareButton
                    title=resource.name
                    text=format!("I found this helpful UK support resource: {}.", resource.name)
                    url=Signal::derive(move || resource.website.to_owned())
                    label="Share this resource"
                />
            </div>
        </div>
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let chat_visible = RwSignal::new(false);
    let share_url =
        Signal::derive(move || NavState::to(View::Support).share_url(&util::origin()));

    let immediate = content::immediate_help()
        .into_iter()
        .map(|resource| view! { <ResourceCard resource=resource/> })
        .collect_view();
    let other = content::other_support()
        .into_iter()
        .map(|resource| view! { <ResourceCard resource=resource/> })
        .collect_view();

    view! {
        <div class="page page--support">
            <div class="page__header">
                <div class="page__heading-row">
                    <h2 class="page__heading">"UK Support Services"</h2>
                    <ShareButton
                        title="UK Support Services"
                        text="I found this helpful list of UK support services for addiction and mental health."
                            .to_owned()
                        url=share_url
                        label="Share this page"
                    />
                </div>
                <p class="page__subheading">
                    "Confidential services that can provide support and guidance."
                </p>
            </div>

            <div class="callout callout--teal support__chat-card">
                <h3 class="callout__title">"Beacon Assistant"</h3>
                <p class="callout__text">
                    "Your confidential AI guide for in-the-moment support. Available 24/7."
                </p>
                <Show
                    when=move || chat_visible.get()
                    fallback=move || {
                        view! {
                            <button class="btn btn--teal" on:click=move |_| chat_visible.set(true)>
                                "Start Chat"
                            </button>
                        }
                    }
                >
                    <SupportChat/>
                </Show>
            </div>

            <div class="support__crisis">
                <h3 class="support__crisis-heading">"Immediate, Confidential Help"</h3>
                <p class="support__crisis-subheading">
                    "If you are in distress, please contact one of these services now."
                </p>
                <div class="support__crisis-grid">{immediate}</div>
            </div>

            <h3 class="support__other-heading">"Addiction & Wellbeing Support"</h3>
            <div class="support__grid">{other}</div>

            <div class="page__back">
                <a class="btn btn--secondary" href="/">
                    "← Back"
                </a>
            </div>
        </div>
    }
}
