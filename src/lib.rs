pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod logging;
pub mod normalize;
pub mod score;
pub mod types;
