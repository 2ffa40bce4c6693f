pub mod board;
pub mod components;
pub mod hooks;
pub mod view;

pub use components::*;
pub use hooks::*;
