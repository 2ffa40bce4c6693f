pub mod activity;
pub mod reply;

pub use activity::{Activity, ActivitySet};
pub use reply::{ApiReply, EmailBody, ReplyBody};
