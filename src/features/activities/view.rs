use crate::models::{Activity, ActivitySet};

pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

// One rendered activity card
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

impl ActivityCard {
    pub fn schedule_label(&self) -> String {
        format!("Schedule: {}", self.schedule)
    }

    pub fn availability_label(&self) -> String {
        format!("Availability: {} spots left", self.spots_left)
    }
}

impl From<&Activity> for ActivityCard {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity.participants.clone(),
        }
    }
}

pub fn build_cards(activities: &ActivitySet) -> Vec<ActivityCard> {
    activities.iter().map(ActivityCard::from).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Listing {
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }
}

// Everything the board controller needs from the page
pub trait BoardView {
    // Replaces the activity list and the selector options
    fn show_activities(&self, cards: Vec<ActivityCard>, options: Vec<String>);
    fn show_load_failure(&self);
    fn show_status(&self, status: StatusMessage);
    fn hide_status(&self);
    fn reset_form(&self);
    fn confirm(&self, prompt: &str) -> bool;
    fn alert(&self, text: &str);
}
