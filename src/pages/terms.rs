//! The terms and conditions page.

use leptos::prelude::*;

use crate::util::dates;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="page page--narrow static-page">
            <div class="page__header">
                <h2 class="page__heading">"Terms & Conditions"</h2>
                <p class="page__subheading">
                    {move || format!("Last updated: {}", dates::today())}
                </p>
            </div>

            <div class="static-page__card">
                <p>
                    "Welcome to Find Offlicence Near Me. By using this application (\"app\"), you agree to be bound by these Terms and Conditions. Please read them carefully."
                </p>

                <h3 class="static-page__section">"1. Service Description"</h3>
                <p>
                    "This app provides a search tool to find local services and offers access to informational resources and support contacts related to mindful drinking and mental health."
                </p>

                <h3 class="static-page__section">"2. Third-Party Links & Content"</h3>
                <p>
                    "Our app provides links to third-party websites and services, such as Google Maps for search results and various support organizations. We do not control and are not responsible for the content, accuracy, privacy policies, or practices of any third-party services. Information such as business opening hours, locations, and availability is provided by these third parties and we cannot guarantee its accuracy."
                </p>

                <h3 class="static-page__section static-page__section--alert">
                    "3. Health & Medical Disclaimer"
                </h3>
                <p class="static-page__emphasis">
                    "All content provided in this app, including articles, quiz results, and information in the Mindful Drinking Hub, is for informational purposes only. It is not intended to be a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified health provider with any questions you may have regarding a medical condition. Never disregard professional medical advice or delay in seeking it because of something you have read in this app."
                </p>

                <h3 class="static-page__section">"4. Intellectual Property Rights"</h3>
                <p>
                    "The app and its original content (excluding data from third-parties), features, and functionality are and will remain the exclusive property of Find Offlicence Near Me and its licensors. The app is protected by copyright, trademark, and other laws of both the United Kingdom and foreign countries."
                </p>

                <h3 class="static-page__section">"5. Limitation of Liability"</h3>
                <p>
                    "In no event shall Find Offlicence Near Me, nor its directors, employees, partners, agents, suppliers, or affiliates, be liable for any indirect, incidental, special, consequential or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses, resulting from your access to or use of or inability to access or use the app."
                </p>

                <h3 class="static-page__section">"6. Changes to Terms"</h3>
                <p>
                    "We reserve the right, at our sole discretion, to modify or replace these Terms at any time. We will provide notice of any changes by posting the new Terms and Conditions on this page."
                </p>

                <h3 class="static-page__section">"7. Contacting Us"</h3>
                <p>
                    "If you have any questions about these Terms, please contact us using the information on our Contact page."
                </p>
            </div>

            <div class="page__back">
                <a class="btn btn--secondary" href="/">
                    "← Back"
                </a>
            </div>
        </div>
    }
}
