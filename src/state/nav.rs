//! The view router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The address bar is the only navigation state. Every screen is addressed
//! by the query parameters `view` and (for articles) `slug`; pushing a new
//! entry goes through the browser history, and back/forward re-derive the
//! screen from the URL. There is no app-side history stack.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::content;

pub const APP_NAME: &str = "Off Licence Near Me";

/// One screen of the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Search,
    Support,
    Contact,
    About,
    Privacy,
    Terms,
    Resources,
    Article,
    Quiz,
    MindfulDrinking,
}

impl View {
    /// The `view` query parameter value for this screen.
    pub fn as_param(self) -> &'static str {
        match self {
            View::Search => "search",
            View::Support => "support",
            View::Contact => "contact",
            View::About => "about",
            View::Privacy => "privacy",
            View::Terms => "terms",
            View::Resources => "resources",
            View::Article => "article",
            View::Quiz => "quiz",
            View::MindfulDrinking => "mindful_drinking",
        }
    }

    /// Parse a `view` query parameter. Unknown or absent values fall back
    /// to the search screen.
    pub fn from_param(param: Option<&str>) -> View {
        match param {
            Some("support") => View::Support,
            Some("contact") => View::Contact,
            Some("about") => View::About,
            Some("privacy") => View::Privacy,
            Some("terms") => View::Terms,
            Some("resources") => View::Resources,
            Some("article") => View::Article,
            Some("quiz") => View::Quiz,
            // Both historical spellings occur in shared URLs; the emitted
            // form is the underscore one.
            Some("mindful_drinking" | "mindful-drinking") => View::MindfulDrinking,
            _ => View::Search,
        }
    }
}

/// The screen identity derived from the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub view: View,
    /// Only meaningful when `view == Article`.
    pub slug: Option<String>,
}

impl NavState {
    pub fn home() -> Self {
        Self::default()
    }

    pub fn to(view: View) -> Self {
        Self { view, slug: None }
    }

    pub fn article(slug: impl Into<String>) -> Self {
        Self { view: View::Article, slug: Some(slug.into()) }
    }

    /// Derive the screen from raw query parameters. The slug is discarded
    /// unless the view is `article`, so stray slugs never make two
    /// otherwise-equal states unequal.
    pub fn from_query(view: Option<&str>, slug: Option<&str>) -> Self {
        let view = View::from_param(view);
        let slug = match view {
            View::Article => slug.filter(|s| !s.is_empty()).map(str::to_owned),
            _ => None,
        };
        Self { view, slug }
    }

    /// The in-app href encoding this state. The search screen is the bare
    /// root so the home URL stays clean.
    pub fn href(&self) -> String {
        match (self.view, &self.slug) {
            (View::Search, _) => "/".to_owned(),
            (view, None) => format!("/?view={}", view.as_param()),
            (view, Some(slug)) => {
                format!("/?view={}&slug={}", view.as_param(), urlencoding::encode(slug))
            }
        }
    }

    /// Absolute URL for share sheets, given `window.location.origin`.
    pub fn share_url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.href())
    }

    /// The article this state points at, if it resolves.
    pub fn article_ref(&self) -> Option<&'static content::Article> {
        match self.view {
            View::Article => self.slug.as_deref().and_then(content::article_by_slug),
            _ => None,
        }
    }

    /// Document title for this screen.
    pub fn title(&self) -> String {
        let heading = match self.view {
            View::Search => "Find Late-Night Shops, Food & More",
            View::Support => "Addiction & Mental Health Support",
            View::Contact => "Contact Us",
            View::About => "About Us",
            View::Privacy => "Privacy Policy",
            View::Terms => "Terms & Conditions",
            View::Resources => "Helpful Resources",
            View::MindfulDrinking => "Mindful Drinking Hub",
            View::Quiz => "Mindful Drinking Quiz",
            View::Article => self.article_ref().map_or("Resource", |a| a.title),
        };
        format!("{heading} | {APP_NAME}")
    }
}
