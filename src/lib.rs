//! LinkedIn strategist library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod strategy;
pub mod output;

pub use error::{Result, StrategistError};
pub use config::Config;
