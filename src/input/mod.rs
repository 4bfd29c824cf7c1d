//! Input processing module
//! Handles format detection, text extraction, and input management

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::ResumeFormat;
pub use manager::{parse_manual_profile, InputManager};
