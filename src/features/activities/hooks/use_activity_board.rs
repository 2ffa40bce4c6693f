use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::services::{GlooDelay, HttpActivityApi};
use crate::core::BoardConfig;
use crate::features::activities::board::ActivityBoard;
use crate::features::activities::view::{ActivityCard, BoardView, Listing, StatusMessage};

// Reactive page state the board components render from
#[derive(Clone, Copy)]
pub struct BoardSignals {
    pub listing: RwSignal<Listing>,
    pub options: RwSignal<Vec<String>>,
    pub status: RwSignal<Option<StatusMessage>>,
    pub status_visible: RwSignal<bool>,
    pub email: RwSignal<String>,
    pub selected_activity: RwSignal<String>,
}

impl BoardSignals {
    pub fn new() -> Self {
        Self {
            listing: RwSignal::new(Listing::Loading),
            options: RwSignal::new(Vec::new()),
            status: RwSignal::new(None),
            status_visible: RwSignal::new(false),
            email: RwSignal::new(String::new()),
            selected_activity: RwSignal::new(String::new()),
        }
    }
}

impl Default for BoardSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView for BoardSignals {
    fn show_activities(&self, cards: Vec<ActivityCard>, options: Vec<String>) {
        self.listing.set(Listing::Loaded(cards));
        // A choice that no longer exists falls back to the placeholder
        let still_listed = self.selected_activity.with_untracked(|s| s.is_empty() || options.contains(s));
        if !still_listed {
            self.selected_activity.set(String::new());
        }
        // Replaced wholesale so reloads never stack duplicate options
        self.options.set(options);
    }

    fn show_load_failure(&self) {
        self.listing.set(Listing::Failed);
    }

    fn show_status(&self, status: StatusMessage) {
        self.status.set(Some(status));
        self.status_visible.set(true);
    }

    fn hide_status(&self) {
        self.status_visible.set(false);
    }

    fn reset_form(&self) {
        self.email.set(String::new());
        self.selected_activity.set(String::new());
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .map(|w| w.confirm_with_message(prompt).unwrap_or(false))
            .unwrap_or(false)
    }

    fn alert(&self, text: &str) {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(text).is_err() {
                web_sys::console::error_1(&format!("Could not show alert: {}", text).into());
            }
        }
    }
}

pub type BrowserBoard = ActivityBoard<HttpActivityApi, BoardSignals, GlooDelay>;

// Binds the board operations to UI events. Copy so it can be moved into
// any number of view closures.
#[derive(Clone, Copy)]
pub struct ActivityBoardHook {
    pub state: BoardSignals,
    board: StoredValue<Rc<BrowserBoard>, LocalStorage>,
}

impl ActivityBoardHook {
    pub fn reload(&self) {
        let board = self.board.get_value();
        spawn_local(async move {
            if let Err(e) = board.load_and_render().await {
                web_sys::console::error_1(&format!("Reload failed: {}", e).into());
            }
        });
    }

    pub fn remove_participant(&self, activity: String, email: String) {
        let board = self.board.get_value();
        spawn_local(async move {
            if let Err(e) = board.remove_participant(&activity, &email).await {
                web_sys::console::error_1(&format!("Failed to remove {} from {}: {}", email, activity, e).into());
            }
        });
    }

    pub fn submit_signup(&self) {
        let email = self.state.email.get_untracked();
        let activity = self.state.selected_activity.get_untracked();
        let board = self.board.get_value();
        spawn_local(async move {
            if let Err(e) = board.submit_signup(&email, &activity).await {
                web_sys::console::error_1(&format!("Signup for {} failed: {}", activity, e).into());
            }
        });
    }
}

pub fn use_activity_board(config: BoardConfig) -> ActivityBoardHook {
    let state = BoardSignals::new();
    let api = HttpActivityApi::new(config.api_base.clone());
    let board = Rc::new(ActivityBoard::new(api, state, GlooDelay, config));

    let hook = ActivityBoardHook {
        state,
        board: StoredValue::new_local(board),
    };

    // Load activities on mount
    hook.reload();

    hook
}
