//! Report rendering for console, JSON, Markdown and HTML

pub mod formatter;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
