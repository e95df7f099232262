//! Contact form categories, message templates and cross-screen prefill.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// `(value, label)` pairs for the category select, in display order.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("suggestion", "Suggestion"),
    ("bug_report", "Bug Report"),
    ("business_inquiry", "Business Inquiry"),
    ("general_feedback", "General Feedback"),
    ("question", "Question"),
    ("designer_contact", "Contact Designer"),
];

/// Starter text inserted when the user picks a category.
pub fn template(category: &str) -> Option<&'static str> {
    match category {
        "suggestion" => Some("Hi, I have a suggestion to improve the app:\n\n"),
        "bug_report" => Some(
            "Hi, I encountered an error.\n\nSteps to reproduce:\n\nWhat happened:\n\nWhat I expected to happen:\n",
        ),
        "business_inquiry" => Some(
            "Hi, I'm a business owner and I'd like to learn more about claiming or updating my listing.\n\nBusiness Name:\nLocation:\n",
        ),
        "general_feedback" => Some("Hi, I'd like to share some general feedback:\n\n"),
        "question" => Some("Hi, I have a question about the app:\n\n"),
        "designer_contact" => Some(
            "Hi Mark,\n\nI'm getting in touch via the link in the app footer. I'd like to talk about...\n\n",
        ),
        _ => None,
    }
}

/// Values carried into the contact form from another screen. Cleared by the
/// router when the user navigates away from the contact view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prefill {
    pub category: String,
    /// Overrides the category template when present.
    pub message: Option<String>,
}

impl Prefill {
    /// The message the form should start with.
    pub fn initial_message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => template(&self.category).unwrap_or_default().to_owned(),
        }
    }

    /// Prefill produced by the "report a problem" action on an error.
    pub fn bug_report(message: &str, details: &str) -> Self {
        Self {
            category: "bug_report".to_owned(),
            message: Some(format!(
                "Hi, I encountered an error.\n\nError Message:\n{message}\n\nTechnical Details:\n{details}\n\nSteps to reproduce (optional):\n"
            )),
        }
    }

    /// Prefill produced by the business CTA on the search screen.
    pub fn business_inquiry() -> Self {
        Self {
            category: "business_inquiry".to_owned(),
            message: Some(
                "Hi, I'm a business owner and I'd like to learn more about claiming or updating my listing on your app.\n\nBusiness Name:\nLocation:\n"
                    .to_owned(),
            ),
        }
    }
}
