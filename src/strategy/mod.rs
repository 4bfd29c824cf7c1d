//! Strategy generation: immediate fixes and week-by-week roadmaps per mode

pub mod provider;
pub mod standard;
pub mod enhanced;
pub mod generator;

pub use generator::StrategyGenerator;
pub use provider::{default_provider, RecommendationProvider};
