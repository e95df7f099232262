use super::*;

// =============================================================
// Lookup
// =============================================================

#[test]
fn every_slug_resolves_to_its_own_article() {
    for article in articles() {
        let found = article_by_slug(article.slug);
        assert_eq!(found.map(|a| a.title), Some(article.title));
    }
}

#[test]
fn unknown_slug_yields_none() {
    assert!(article_by_slug("no-such-article").is_none());
    assert!(article_by_slug("").is_none());
}

#[test]
fn slugs_are_unique() {
    let mut slugs: Vec<_> = articles().iter().map(|a| a.slug).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), articles().len());
}

// =============================================================
// Category chips
// =============================================================

#[test]
fn categories_start_with_all_and_keep_first_appearance_order() {
    let categories = article_categories();
    assert_eq!(
        categories,
        vec![
            "All",
            "Mindful Drinking",
            "Coping Strategies",
            "Supporting Others",
            "Health & Wellbeing",
        ]
    );
}

#[test]
fn articles_have_nonempty_bodies() {
    for article in articles() {
        assert!(!article.body.is_empty(), "{} has no body", article.slug);
        assert!(!article.summary.is_empty());
    }
}
