use leptos::prelude::*;
use crate::core::BoardConfig;
use crate::features::activities::{use_activity_board, ActivityList, SignupForm, StatusBanner};

#[component]
pub fn Activities() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let hook = use_activity_board(config);

    view! {
        <div class="activities-page">
            <header>
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>

            <main>
                <section id="activities-container">
                    <h3>"Available Activities"</h3>
                    <ActivityList hook=hook />
                </section>

                <section id="signup-container">
                    <h3>"Sign Up for an Activity"</h3>
                    <SignupForm hook=hook />
                    <StatusBanner hook=hook />
                </section>
            </main>
        </div>
    }
}
