pub mod use_activity_board;

pub use use_activity_board::*;
