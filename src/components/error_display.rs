//! Inline error panel with retry and "report a problem" actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::contact::Prefill;
use crate::state::nav::{NavState, View};

/// A user-visible failure: a plain-language message plus whatever technical
/// detail was available at the failure site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub details: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self { message: message.into(), details: details.into() }
    }
}

/// Error panel. `on_retry` dismisses or retries; the report action carries
/// the message and details into a prefilled bug-report contact form.
#[component]
pub fn ErrorDisplay(
    report: ErrorReport,
    on_retry: Callback<()>,
    #[prop(default = "Try Again")] retry_text: &'static str,
) -> impl IntoView {
    let prefill = expect_context::<RwSignal<Option<Prefill>>>();
    let navigate = use_navigate();
    let show_details = RwSignal::new(false);

    let details = report.details.clone();
    let has_details = !details.is_empty();
    let report_for_prefill = report.clone();

    let on_report = move |_| {
        prefill.set(Some(Prefill::bug_report(
            &report_for_prefill.message,
            &report_for_prefill.details,
        )));
        navigate(&NavState::to(View::Contact).href(), Default::default());
    };

    view! {
        <div class="error-panel" role="alert">
            <svg
                class="error-panel__icon"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M12 9v3.75m-9.303 3.376c-.866 1.5.217 3.374 1.948 3.374h14.71c1.73 0 2.813-1.874 1.948-3.374L13.949 3.378c-.866-1.5-3.032-1.5-3.898 0L2.697 16.126zM12 15.75h.007v.008H12v-.008z"
                />
            </svg>
            <p class="error-panel__message">{report.message.clone()}</p>

            {has_details
                .then(|| {
                    view! {
                        <div class="error-panel__details">
                            <button
                                class="error-panel__details-toggle"
                                on:click=move |_| show_details.update(|s| *s = !*s)
                            >
                                {move || {
                                    if show_details.get() {
                                        "Hide technical details"
                                    } else {
                                        "Show technical details"
                                    }
                                }}
                            </button>
                            <Show when=move || show_details.get()>
                                <pre class="error-panel__details-body">{details.clone()}</pre>
                            </Show>
                        </div>
                    }
                })}

            <div class="error-panel__actions">
                <button class="btn btn--primary" on:click=move |_| on_retry.run(())>
                    {retry_text}
                </button>
                <button class="btn btn--ghost" on:click=on_report>
                    "Report Problem"
                </button>
            </div>
        </div>
    }
}
