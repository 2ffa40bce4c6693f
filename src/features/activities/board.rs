use std::cell::Cell;

use leptos::logging::{error, log};
use thiserror::Error;

use crate::core::services::{ActivityApi, ApiError, Delay};
use crate::core::BoardConfig;
use crate::features::activities::view::{build_cards, BoardView, StatusMessage};

pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_ERROR_FALLBACK: &str = "An error occurred";
pub const REMOVE_ERROR_FALLBACK: &str = "Error";
pub const REMOVE_FAILED_PREFIX: &str = "Failed to remove participant: ";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    #[error("failed to load activities: {0}")]
    Load(#[source] ApiError),
    // The backend answered with a non-2xx status
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Declined,
    Removed,
}

// Page controller for the activities board. Every operation reports its
// own failures through the view; the returned Result is for the caller's logs.
pub struct ActivityBoard<A, V, D> {
    api: A,
    view: V,
    delay: D,
    config: BoardConfig,
    // Bumped for every status message shown, a pending hide only applies to its own message
    status_seq: Cell<u64>,
}

impl<A, V, D> ActivityBoard<A, V, D>
where
    A: ActivityApi,
    V: BoardView,
    D: Delay,
{
    pub fn new(api: A, view: V, delay: D, config: BoardConfig) -> Self {
        Self {
            api,
            view,
            delay,
            config,
            status_seq: Cell::new(0),
        }
    }

    // Fetch the activity set and rebuild the list and the selector
    pub async fn load_and_render(&self) -> Result<usize, BoardError> {
        match self.api.list_activities().await {
            Ok(activities) => {
                let cards = build_cards(&activities);
                let count = cards.len();
                self.view.show_activities(cards, activities.names());
                Ok(count)
            }
            Err(e) => {
                error!("Error fetching activities: {}", e);
                self.view.show_load_failure();
                Err(BoardError::Load(e))
            }
        }
    }

    pub async fn remove_participant(&self, activity: &str, email: &str) -> Result<Removal, BoardError> {
        if !self.view.confirm(&format!("Remove {} from {}?", email, activity)) {
            return Ok(Removal::Declined);
        }

        let outcome = match self.api.unregister(activity, email).await {
            Ok(reply) if reply.is_success() => Ok(()),
            Ok(reply) => Err(BoardError::Rejected {
                status: reply.status,
                detail: reply
                    .body
                    .detail_text()
                    .unwrap_or_else(|| REMOVE_ERROR_FALLBACK.to_string()),
            }),
            Err(e) => Err(BoardError::Api(e)),
        };

        match outcome {
            Ok(()) => {
                log!("Removed {} from {}", email, activity);
                // A failed reload is already shown in the list
                let _ = self.load_and_render().await;
                Ok(Removal::Removed)
            }
            Err(e) => {
                self.view.alert(&format!("{}{}", REMOVE_FAILED_PREFIX, e));
                Err(e)
            }
        }
    }

    // Resolves once the status message's hide delay has elapsed
    pub async fn submit_signup(&self, email: &str, activity: &str) -> Result<String, BoardError> {
        let reply = match self.api.signup(activity, email).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error signing up: {}", e);
                self.show_status(StatusMessage::error(SIGNUP_FAILED_TEXT));
                return Err(e.into());
            }
        };

        if reply.is_success() {
            let message = reply.body.message.unwrap_or_default();
            let ticket = self.show_status(StatusMessage::success(message.clone()));
            self.view.reset_form();
            let _ = futures::join!(self.load_and_render(), self.expire_status(ticket));
            Ok(message)
        } else {
            let detail = reply
                .body
                .detail_text()
                .unwrap_or_else(|| SIGNUP_ERROR_FALLBACK.to_string());
            let ticket = self.show_status(StatusMessage::error(detail.clone()));
            self.expire_status(ticket).await;
            Err(BoardError::Rejected { status: reply.status, detail })
        }
    }

    fn show_status(&self, status: StatusMessage) -> u64 {
        let ticket = self.status_seq.get() + 1;
        self.status_seq.set(ticket);
        self.view.show_status(status);
        ticket
    }

    async fn expire_status(&self, ticket: u64) {
        self.delay.sleep(self.config.status_timeout).await;
        if self.status_seq.get() == ticket {
            self.view.hide_status();
        }
    }
}
