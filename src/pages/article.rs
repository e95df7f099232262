//! A single article, rendered from its markdown paragraphs.

use leptos::prelude::*;
use pulldown_cmark::{Parser, html};

use crate::components::share_button::ShareButton;
use crate::content::{self, Article};
use crate::state::nav::{NavState, View};
use crate::util;

/// Render one markdown fragment to HTML.
fn markdown_to_html(fragment: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(fragment));
    out
}

/// Up to four related articles: same category first, padded with other
/// articles in library order.
fn related_articles(article: &Article) -> Vec<&'static Article> {
    let mut related: Vec<&'static Article> = content::articles()
        .iter()
        .filter(|a| a.category == article.category && a.slug != article.slug)
        .collect();
    for other in content::articles() {
        if related.len() >= 4 {
            break;
        }
        if other.slug != article.slug && !related.iter().any(|a| a.slug == other.slug) {
            related.push(other);
        }
    }
    related.truncate(4);
    related
}

/// Article screen. An unknown slug renders a not-found placeholder rather
/// than failing the whole page.
#[component]
pub fn ArticlePage(#[prop(into)] slug: Signal<Option<String>>) -> impl IntoView {
    move || {
        let article = slug.get().as_deref().and_then(content::article_by_slug);
        match article {
            Some(article) => view! { <ArticleBody article=article/> }.into_any(),
            None => {
                view! {
                    <div class="page page--narrow">
                        <p class="article__not-found">"Article not found."</p>
                        <div class="page__back">
                            <a class="btn btn--secondary" href=NavState::to(View::Resources).href()>
                                "← Back to Resources"
                            </a>
                        </div>
                    </div>
                }
                .into_any()
            }
        }
    }
}

#[component]
fn ArticleBody(article: &'static Article) -> impl IntoView {
    let share_url =
        Signal::derive(move || NavState::article(article.slug).share_url(&util::origin()));

    let paragraphs = article
        .body
        .iter()
        .map(|fragment| {
            view! { <div class="article__paragraph" inner_html=markdown_to_html(fragment)></div> }
        })
        .collect_view();

    let related = related_articles(article);
    let related_cards = (!related.is_empty()).then(|| {
        let cards = related
            .into_iter()
            .map(|related| {
                view! {
                    <a class="article-card" href=NavState::article(related.slug).href()>
                        <p class="article-card__category">{related.category}</p>
                        <h3 class="article-card__title">{related.title}</h3>
                        <p class="article-card__summary">{related.summary}</p>
                        <span class="article-card__more">"Read More →"</span>
                    </a>
                }
            })
            .collect_view();
        view! {
            <div class="article__related">
                <h2 class="article__related-heading">"Related Articles"</h2>
                <div class="article__related-grid">{cards}</div>
            </div>
        }
    });

    view! {
        <div class="page page--narrow">
            <div class="article__header">
                <h1 class="article__title">{article.title}</h1>
                <ShareButton
                    title=article.title
                    text=format!("I thought this article was interesting: \"{}\"", article.title)
                    url=share_url
                    label="Share this article"
                />
            </div>
            <article class="article__body">{paragraphs}</article>
            {related_cards}
            <div class="page__back">
                <a class="btn btn--secondary" href=NavState::to(View::Resources).href()>
                    "← Back to Resources"
                </a>
            </div>
        </div>
    }
}
