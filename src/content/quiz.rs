//! The mindful drinking self-check quiz.
//!
//! Answers are scored 1-3 per question and summed; the total lands in one
//! of three fixed result bands. Nothing is stored.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: &'static str,
    pub score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [AnswerOption],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub score_min: u32,
    pub score_max: u32,
    pub title: &'static str,
    pub feedback: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: &'static [Question],
    pub results: &'static [QuizResult],
}

/// The quiz.
pub fn quiz() -> &'static Quiz {
    &MINDFUL_DRINKING_QUIZ
}

/// The result band covering `total`, if any band does.
pub fn result_for(total: u32) -> Option<&'static QuizResult> {
    MINDFUL_DRINKING_QUIZ
        .results
        .iter()
        .find(|r| (r.score_min..=r.score_max).contains(&total))
}

static MINDFUL_DRINKING_QUIZ: Quiz = Quiz {
    slug: "mindful-drinking-quiz",
    title: "Mindful Drinking Check-in",
    description: "This is a private, anonymous check-in to help you reflect on your drinking habits. Your answers are not stored. Be honest with yourself.",
    questions: &[
        Question {
            text: "When you have your first drink of an evening, how much attention do you pay to the taste and aroma?",
            options: &[
                AnswerOption { text: "I savor it, taking my time to enjoy the experience.", score: 1 },
                AnswerOption { text: "I notice it sometimes, but I'm often distracted.", score: 2 },
                AnswerOption { text: "I don't really think about it; I'm more focused on the effect.", score: 3 },
            ],
        },
        Question {
            text: "How often do you decide how much you'll drink *before* you start, and stick to it?",
            options: &[
                AnswerOption { text: "Almost always. I set a limit and respect it.", score: 1 },
                AnswerOption { text: "Sometimes, but I often drink more than I planned.", score: 2 },
                AnswerOption { text: "Rarely or never. I just see how the night goes.", score: 3 },
            ],
        },
        Question {
            text: "Do you ever drink in response to stress, boredom, or other difficult emotions?",
            options: &[
                AnswerOption { text: "Rarely. I have other coping strategies I use first.", score: 1 },
                AnswerOption { text: "Sometimes. It's one of the ways I cope.", score: 2 },
                AnswerOption { text: "Often. It's my main way to unwind or deal with feelings.", score: 3 },
            ],
        },
        Question {
            text: "How often do you have a non-alcoholic drink (like water) between alcoholic ones?",
            options: &[
                AnswerOption { text: "Most of the time. It helps me stay hydrated and moderate.", score: 1 },
                AnswerOption { text: "Occasionally, if I remember.", score: 2 },
                AnswerOption { text: "Almost never.", score: 3 },
            ],
        },
        Question {
            text: "Have you ever 'lost time' or had gaps in your memory from a period of drinking?",
            options: &[
                AnswerOption { text: "No, never.", score: 1 },
                AnswerOption { text: "Yes, but it was a long time ago / a one-off.", score: 2 },
                AnswerOption { text: "Yes, it has happened on more than one occasion.", score: 3 },
            ],
        },
    ],
    results: &[
        QuizResult {
            score_min: 5,
            score_max: 7,
            title: "You're a Mindful Drinker",
            feedback: "It sounds like you have a very conscious and intentional relationship with alcohol. You prioritize the sensory experience over the effect and have strong strategies for moderation. Keep trusting your instincts and enjoying your balanced approach.",
        },
        QuizResult {
            score_min: 8,
            score_max: 11,
            title: "On the Path to Mindfulness",
            feedback: "You're showing awareness around your habits, but sometimes autopilot takes over. This is very common. You could benefit from practicing some of the techniques in our 'Guide to Mindful Drinking' article to make your intentions and actions align more often. You're already halfway there!",
        },
        QuizResult {
            score_min: 12,
            score_max: 15,
            title: "An Opportunity for Reflection",
            feedback: "Your results suggest that drinking may be more of a habit than a conscious choice right now, and might be linked to coping with emotions. This is a valuable insight. It could be a great time to explore your relationship with alcohol more deeply. Our resources on cravings and the benefits of taking a break might be a helpful starting point. If you feel you need more support, please know that confidential help is always available.",
        },
    ],
};
