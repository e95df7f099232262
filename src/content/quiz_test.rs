use super::*;

// =============================================================
// Quiz shape
// =============================================================

#[test]
fn quiz_has_five_questions_with_three_options_each() {
    let quiz = quiz();
    assert_eq!(quiz.slug, "mindful-drinking-quiz");
    assert_eq!(quiz.questions.len(), 5);
    for question in quiz.questions {
        assert_eq!(question.options.len(), 3);
        let scores: Vec<_> = question.options.iter().map(|o| o.score).collect();
        assert_eq!(scores, vec![1, 2, 3]);
    }
}

// =============================================================
// Result bands
// =============================================================

#[test]
fn every_reachable_total_lands_in_exactly_one_band() {
    // Five questions scored 1-3 apiece.
    for total in 5..=15 {
        let matches = quiz()
            .results
            .iter()
            .filter(|r| (r.score_min..=r.score_max).contains(&total))
            .count();
        assert_eq!(matches, 1, "total {total} matched {matches} bands");
    }
}

#[test]
fn band_boundaries_match_the_published_titles() {
    assert_eq!(result_for(5).map(|r| r.title), Some("You're a Mindful Drinker"));
    assert_eq!(result_for(7).map(|r| r.title), Some("You're a Mindful Drinker"));
    assert_eq!(result_for(8).map(|r| r.title), Some("On the Path to Mindfulness"));
    assert_eq!(result_for(11).map(|r| r.title), Some("On the Path to Mindfulness"));
    assert_eq!(result_for(12).map(|r| r.title), Some("An Opportunity for Reflection"));
    assert_eq!(result_for(15).map(|r| r.title), Some("An Opportunity for Reflection"));
}

#[test]
fn unreachable_totals_have_no_band() {
    assert!(result_for(0).is_none());
    assert!(result_for(4).is_none());
    assert!(result_for(16).is_none());
}
