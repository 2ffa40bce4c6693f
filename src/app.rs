use leptos::prelude::*;
use crate::core::BoardConfig;
use crate::pages::Activities;

#[component]
pub fn App() -> impl IntoView {
    provide_context(BoardConfig::default());

    view! {
        <div class="app">
            <Activities />
        </div>
    }
}
