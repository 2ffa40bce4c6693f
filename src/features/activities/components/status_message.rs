use leptos::prelude::*;
use crate::features::activities::hooks::ActivityBoardHook;

// The `message` region below the signup form
#[component]
pub fn StatusBanner(hook: ActivityBoardHook) -> impl IntoView {
    let status = hook.state.status;
    let visible = hook.state.status_visible;

    let class = move || {
        let kind = status.with(|s| s.as_ref().map(|s| s.kind.as_class()).unwrap_or(""));
        if visible.get() {
            kind.to_string()
        } else {
            format!("{} hidden", kind).trim().to_string()
        }
    };

    view! {
        <div id="message" class=class>
            {move || status.with(|s| s.as_ref().map(|s| s.text.clone()).unwrap_or_default())}
        </div>
    }
}
