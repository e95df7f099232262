//! The Resources screen: hub and quiz call-outs plus the article library.

use leptos::prelude::*;

use crate::components::share_button::ShareButton;
use crate::content;
use crate::state::nav::{NavState, View};
use crate::util;

#[component]
fn ArticleCard(article: &'static content::Article) -> impl IntoView {
    view! {
        <div class="article-card">
            <p class="article-card__category">{article.category}</p>
            <h3 class="article-card__title">{article.title}</h3>
            <p class="article-card__summary">{article.summary}</p>
            <a class="article-card__more" href=NavState::article(article.slug).href()>
                "Read More →"
            </a>
        </div>
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let active_category = RwSignal::new("All");
    let share_url = Signal::derive(move || {
        NavState::to(View::Resources).share_url(&util::origin())
    });

    let chips = content::article_categories()
        .into_iter()
        .map(|category| {
            let class = move || {
                if active_category.get() == category {
                    "chip chip--active"
                } else {
                    "chip"
                }
            };
            view! {
                <button class=class on:click=move |_| active_category.set(category)>
                    {category}
                </button>
            }
        })
        .collect_view();

    let filtered = move || {
        let active = active_category.get();
        content::articles()
            .iter()
            .filter(|a| active == "All" || a.category == active)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page page--resources">
            <div class="page__header">
                <div class="page__heading-row">
                    <h2 class="page__heading">"Helpful Resources"</h2>
                    <ShareButton
                        title="Helpful Resources on Off Licence Near Me"
                        text="I found some useful articles about mindful drinking and support.".to_owned()
                        url=share_url
                        label="Share this page"
                    />
                </div>
                <p class="page__subheading">
                    "Information to help you understand and navigate your relationship with alcohol."
                </p>
            </div>

            <div class="resources-callouts">
                <div class="callout callout--teal">
                    <h3 class="callout__title">"Mindful Drinking Hub"</h3>
                    <p class="callout__text">
                        "Access your private dashboard with a drink tracker, savings calculator, and other tools to support your mindfulness journey."
                    </p>
                    <a class="btn btn--teal" href=NavState::to(View::MindfulDrinking).href()>
                        "Open Hub"
                    </a>
                </div>
                <div class="callout">
                    <h3 class="callout__title">"Mindful Drinking Check-in"</h3>
                    <p class="callout__text">
                        "Take a short, private quiz to reflect on your habits. No data is saved, and the results are for your eyes only."
                    </p>
                    <a class="btn btn--primary" href=NavState::to(View::Quiz).href()>
                        "Start the Quiz"
                    </a>
                </div>
            </div>

            <h3 class="resources__articles-heading">"Articles & Guides"</h3>
            <div class="resources__chips">{chips}</div>

            <div class="resources__grid">
                {move || {
                    let articles = filtered();
                    if articles.is_empty() {
                        return view! {
                            <div class="resources__empty">
                                <p>"No articles found in this category."</p>
                            </div>
                        }
                            .into_any();
                    }
                    articles
                        .into_iter()
                        .map(|article| view! { <ArticleCard article=article/> })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="page__back">
                <a class="btn btn--secondary" href="/">
                    "← Back"
                </a>
            </div>
        </div>
    }
}
