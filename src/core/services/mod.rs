pub mod activity_api;
pub mod delay;

pub use activity_api::*;
pub use delay::*;
