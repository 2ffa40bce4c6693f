use leptos::ev;
use leptos::prelude::*;
use crate::features::activities::hooks::ActivityBoardHook;

#[component]
pub fn SignupForm(hook: ActivityBoardHook) -> impl IntoView {
    let email = hook.state.email;
    let selected = hook.state.selected_activity;
    let options = hook.state.options;

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Keep the browser from posting the form itself
        ev.prevent_default();
        hook.submit_signup();
    };

    view! {
        <form id="signup-form" on:submit=handle_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    on:input=move |ev| email.set(event_target_value(&ev))
                    prop:value=move || email.get()
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| selected.set(event_target_value(&ev))
                    prop:value=move || selected.get()
                >
                    <option value="">"-- Select an activity --"</option>
                    // Keyed so a reload keeps existing option nodes, the chosen one stays selected
                    <For
                        each=move || options.get()
                        key=|name| name.clone()
                        children=move |name: String| {
                            let label = name.clone();
                            let option_name = name.clone();
                            view! {
                                <option
                                    value=name
                                    prop:selected=move || selected.with(|s| *s == option_name)
                                >
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
