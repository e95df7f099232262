//! The About ("Our Mission") page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--narrow static-page">
            <div class="page__header">
                <h2 class="page__heading">"Our Mission"</h2>
                <p class="page__subheading">"Providing a choice when you need it most."</p>
            </div>

            <div class="static-page__card">
                <h3 class="static-page__section">"Why We Exist"</h3>
                <p>
                    "Life can be complicated. Whether you're looking for an open shop, a meal after a long day, or a last-minute travel booking, finding what you need can be a challenge. We created this app to be your reliable assistant for those moments, offering a clear and simple way to find solutions, 24/7."
                </p>
                <p>
                    "We also understand that these searches can sometimes happen during moments of vulnerability. Our goal is to meet you where you are, without judgment. That's why we've integrated immediate, confidential access to support resources directly into the app, acknowledging that sometimes, the best choice is a different path."
                </p>

                <h3 class="static-page__section">"Two Paths, One App"</h3>
                <p>
                    <strong>"1. Find What You Need: "</strong>
                    "A straightforward, powerful search hub to help you find services open now, including:"
                </p>
                <ul class="static-page__list">
                    <li>"Off-licences and convenience stores"</li>
                    <li>"Food delivery to your door"</li>
                    <li>"Nearby ATMs and cashpoints"</li>
                    <li>"Last-minute hotel and flight bookings"</li>
                    <li>"On-demand rides"</li>
                </ul>
                <p>
                    <strong>"2. Find Support: "</strong>
                    "A discreet, one-click option to connect with professional, confidential help for addiction and mental health. This is for anyone who might be looking for an alternative."
                </p>

                <p class="static-page__emphasis">
                    "No matter your reason for being here, we're committed to providing a safe, reliable, and helpful experience."
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
