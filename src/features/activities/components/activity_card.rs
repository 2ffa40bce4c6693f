use leptos::prelude::*;
use crate::features::activities::hooks::ActivityBoardHook;
use crate::features::activities::view::ActivityCard;

#[component]
pub fn ActivityCardView(card: ActivityCard, hook: ActivityBoardHook) -> impl IntoView {
    let schedule = card.schedule.clone();
    let availability = format!(" {} spots left", card.spots_left);
    let activity_name = card.name.clone();

    let participants_section = if card.participants.is_empty() {
        view! { <p class="participants-none">"No participants yet."</p> }.into_any()
    } else {
        view! {
            <ul class="participants-list">
                {card.participants.into_iter().map(|email| {
                    let activity = activity_name.clone();
                    let email_for_click = email.clone();
                    view! {
                        <li class="participant-item">
                            <span>{email}</span>
                            <button
                                type="button"
                                class="delete-participant"
                                title="Remove"
                                on:click=move |_| hook.remove_participant(activity.clone(), email_for_click.clone())
                            >
                                <span class="delete-icon">"\u{1F5D1}"</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        }.into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>{format!(" {}", schedule)}</p>
            <p><strong>"Availability:"</strong>{availability}</p>
            <div class="participants-section">
                <strong>"Participants:"</strong>
                {participants_section}
            </div>
        </div>
    }
}
