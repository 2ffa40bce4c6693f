use leptos::prelude::*;
use crate::features::activities::components::ActivityCardView;
use crate::features::activities::hooks::ActivityBoardHook;
use crate::features::activities::view::{Listing, LOAD_FAILED_TEXT};

#[component]
pub fn ActivityList(hook: ActivityBoardHook) -> impl IntoView {
    let listing = hook.state.listing;

    view! {
        <div id="activities-list">
            {move || match listing.get() {
                Listing::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                Listing::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
                Listing::Loaded(cards) => cards.into_iter()
                    .map(|card| view! { <ActivityCardView card=card hook=hook /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
