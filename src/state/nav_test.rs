use super::*;

// =============================================================
// Query parameter codec
// =============================================================

#[test]
fn every_view_round_trips_through_its_param() {
    let views = [
        View::Search,
        View::Support,
        View::Contact,
        View::About,
        View::Privacy,
        View::Terms,
        View::Resources,
        View::Article,
        View::Quiz,
        View::MindfulDrinking,
    ];
    for view in views {
        assert_eq!(View::from_param(Some(view.as_param())), view);
    }
}

#[test]
fn hyphenated_mindful_drinking_spelling_still_parses() {
    assert_eq!(View::from_param(Some("mindful-drinking")), View::MindfulDrinking);
    // The emitted form stays canonical.
    assert_eq!(View::MindfulDrinking.as_param(), "mindful_drinking");
}

#[test]
fn unknown_and_missing_views_fall_back_to_search() {
    assert_eq!(View::from_param(None), View::Search);
    assert_eq!(View::from_param(Some("")), View::Search);
    assert_eq!(View::from_param(Some("dashboard")), View::Search);
    assert_eq!(View::from_param(Some("ARTICLE")), View::Search);
}

#[test]
fn slug_is_only_kept_for_articles() {
    let state = NavState::from_query(Some("article"), Some("recognizing-the-signs"));
    assert_eq!(state.view, View::Article);
    assert_eq!(state.slug.as_deref(), Some("recognizing-the-signs"));

    let state = NavState::from_query(Some("support"), Some("recognizing-the-signs"));
    assert_eq!(state.view, View::Support);
    assert_eq!(state.slug, None);

    let state = NavState::from_query(Some("article"), Some(""));
    assert_eq!(state.slug, None);
}

#[test]
fn stray_slugs_do_not_break_state_equality() {
    assert_eq!(
        NavState::from_query(Some("resources"), Some("anything")),
        NavState::to(View::Resources)
    );
}

// =============================================================
// Hrefs and share URLs
// =============================================================

#[test]
fn search_is_the_bare_root() {
    assert_eq!(NavState::home().href(), "/");
    assert_eq!(NavState::to(View::Search).href(), "/");
}

#[test]
fn hrefs_encode_view_and_slug() {
    assert_eq!(NavState::to(View::Support).href(), "/?view=support");
    assert_eq!(
        NavState::article("what-is-mindful-drinking").href(),
        "/?view=article&slug=what-is-mindful-drinking"
    );
}

#[test]
fn hrefs_percent_encode_unsafe_slugs() {
    let href = NavState::article("a b&c").href();
    assert_eq!(href, "/?view=article&slug=a%20b%26c");
}

#[test]
fn share_urls_prepend_the_origin() {
    assert_eq!(
        NavState::to(View::MindfulDrinking).share_url("https://example.com"),
        "https://example.com/?view=mindful_drinking"
    );
    assert_eq!(
        NavState::to(View::Support).share_url("https://example.com/"),
        "https://example.com/?view=support"
    );
}

// =============================================================
// Titles and article resolution
// =============================================================

#[test]
fn titles_carry_the_app_name_suffix() {
    assert_eq!(
        NavState::home().title(),
        "Find Late-Night Shops, Food & More | Off Licence Near Me"
    );
    assert_eq!(NavState::to(View::Quiz).title(), "Mindful Drinking Quiz | Off Licence Near Me");
}

#[test]
fn article_titles_use_the_resolved_article() {
    let state = NavState::article("benefits-of-taking-a-break");
    assert_eq!(
        state.title(),
        "The 30-Day Reset: What Really Happens When You Stop Drinking | Off Licence Near Me"
    );
}

#[test]
fn unknown_article_slug_degrades_without_panicking() {
    let state = NavState::article("no-such-slug");
    assert!(state.article_ref().is_none());
    assert_eq!(state.title(), "Resource | Off Licence Near Me");
}
