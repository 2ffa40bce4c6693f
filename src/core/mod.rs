pub mod config;
pub mod services;

pub use config::BoardConfig;
