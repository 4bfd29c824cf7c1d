//! Profile extraction, resume structuring, gap analysis and scoring

pub mod models;
pub mod field_extractor;
pub mod resume_structurer;
pub mod gap_analyzer;
pub mod scorer;
pub mod analyzer;

pub use analyzer::{AnalysisEngine, AnalysisOutcome};
