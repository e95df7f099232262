//! The privacy policy page.

use leptos::prelude::*;

use crate::util::dates;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page page--narrow static-page">
            <div class="page__header">
                <h2 class="page__heading">"Privacy Policy"</h2>
                <p class="page__subheading">
                    {move || format!("Last updated: {}", dates::today())}
                </p>
            </div>

            <div class="static-page__card">
                <p>
                    "Your privacy is important to us. This policy explains what information we collect and how we use it."
                </p>

                <h3 class="static-page__section">"Information We Collect"</h3>
                <ul class="static-page__list">
                    <li>
                        <strong>"Search Queries: "</strong>
                        "The locations you type into the search bar are used only to build the outbound search link. We do not link these searches to any personal information."
                    </li>
                    <li>
                        <strong>"On-Device Data: "</strong>
                        "The drink log and hub settings are stored directly on your device using your browser's local storage. We do not have access to this information. It remains on your device until you clear it."
                    </li>
                </ul>

                <h3 class="static-page__section">"Data from Third-Party Services"</h3>
                <p>
                    "To provide results, our application links out to external map and travel services. This includes shop names, addresses, opening hours, ratings, and photos. Your search query is used to fetch this information on their sites."
                </p>

                <h3 class="static-page__section">"How We Use Information"</h3>
                <ul class="static-page__list">
                    <li>"To provide and improve the service's core functionality (finding shops)."</li>
                    <li>"To ensure the app functions correctly and to diagnose technical issues."</li>
                </ul>

                <h3 class="static-page__section">"Information Sharing"</h3>
                <p>
                    "We do not sell, trade, or otherwise transfer your personal information to outside parties. Your search queries and location data are processed anonymously."
                </p>

                <h3 class="static-page__section">"Your Consent"</h3>
                <p>"By using our app, you consent to our privacy policy."</p>

                <h3 class="static-page__section">"Contacting Us"</h3>
                <p>
                    "If you have any questions regarding this privacy policy, you may contact us using the information on our Contact page."
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
