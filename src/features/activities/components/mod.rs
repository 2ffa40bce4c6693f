pub mod activity_card;
pub mod activity_list;
pub mod signup_form;
pub mod status_message;

pub use activity_card::ActivityCardView;
pub use activity_list::ActivityList;
pub use signup_form::SignupForm;
pub use status_message::StatusBanner;
