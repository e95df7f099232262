//! The mindful drinking check-in quiz screen.
//!
//! One question at a time; answers accumulate scores in memory only and a
//! retake starts from scratch. Nothing is persisted.

use leptos::prelude::*;

use crate::content::{self, QuizResult};
use crate::state::nav::{NavState, View};

#[component]
pub fn QuizPage() -> impl IntoView {
    let quiz = content::quiz();
    let current = RwSignal::new(0usize);
    let answers = RwSignal::new(Vec::<u32>::new());
    let finished = RwSignal::new(false);

    let answer = move |score: u32| {
        answers.update(|a| a.push(score));
        if current.get() + 1 < quiz.questions.len() {
            current.update(|c| *c += 1);
        } else {
            finished.set(true);
        }
    };

    let retake = move |_| {
        current.set(0);
        answers.set(Vec::new());
        finished.set(false);
    };

    let result = move || -> Option<&'static QuizResult> {
        let total = answers.get().iter().sum();
        content::result_for(total)
    };

    move || {
        if finished.get() {
            // The shipped bands cover every reachable total; an out-of-band
            // score still gets a sane screen with the retake action.
            let (title, feedback) = result().map_or(
                ("Check-in complete", "Thanks for taking a moment to reflect."),
                |r| (r.title, r.feedback),
            );
            return view! {
                <div class="page page--narrow quiz">
                    <div class="quiz__result">
                        <h2 class="quiz__result-title">{title}</h2>
                        <p class="quiz__result-feedback">{feedback}</p>
                    </div>
                    <div class="quiz__result-actions">
                        <a class="btn btn--secondary" href=NavState::to(View::Resources).href()>
                            "← Back to Resources"
                        </a>
                        <button class="btn btn--primary" on:click=retake>
                            "Retake Quiz"
                        </button>
                    </div>
                </div>
            }
            .into_any();
        }

        let index = current.get();
        let question = &quiz.questions[index];
        let progress = (index as f64 / quiz.questions.len() as f64) * 100.0;

        let options = question
            .options
            .iter()
            .map(|option| {
                let score = option.score;
                view! {
                    <button class="quiz__option" on:click=move |_| answer(score)>
                        {option.text}
                    </button>
                }
            })
            .collect_view();

        view! {
            <div class="page page--narrow quiz">
                <div class="page__header">
                    <h1 class="page__heading">{quiz.title}</h1>
                    <p class="page__subheading">{quiz.description}</p>
                </div>

                <div class="quiz__card">
                    <div class="quiz__progress">
                        <span class="quiz__progress-label">
                            {format!("Question {} of {}", index + 1, quiz.questions.len())}
                        </span>
                        <div class="quiz__progress-track">
                            <div
                                class="quiz__progress-bar"
                                style:width=format!("{progress}%")
                            ></div>
                        </div>
                    </div>
                    <h2 class="quiz__question">{question.text}</h2>
                    <div class="quiz__options">{options}</div>
                </div>

                <div class="page__back">
                    <a class="quiz__cancel" href=NavState::to(View::Resources).href()>
                        "Cancel Quiz"
                    </a>
                </div>
            </div>
        }
        .into_any()
    }
}
