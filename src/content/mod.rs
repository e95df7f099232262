//! Static content store: articles, support directory and the quiz.
//!
//! SYSTEM CONTEXT
//! ==============
//! All editorial content ships inside the binary. There is no CMS and no
//! fetch; pages read these tables directly, so deep links render the same
//! on the server and in the browser.

pub mod articles;
pub mod quiz;
pub mod support;

pub use articles::{article_by_slug, article_categories, articles, Article};
pub use quiz::{quiz, result_for, AnswerOption, Question, Quiz, QuizResult};
pub use support::{immediate_help, other_support, support_resources, SupportResource};
