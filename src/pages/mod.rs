pub mod activities;

pub use activities::Activities;
