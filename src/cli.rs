//! CLI interface for the LinkedIn strategist

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkedin-strategist")]
#[command(about = "LinkedIn profile strategist: resume gap analysis and growth roadmaps")]
#[command(long_about = "Compare a resume with a LinkedIn profile, score the profile and generate immediate fixes plus a week-by-week roadmap for a chosen goal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a LinkedIn profile
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Strategic mode: "Get Hired", "Grow Connections" or "Influence Market"
        #[arg(short, long)]
        mode: String,

        /// OCR text dump of a LinkedIn screenshot (repeatable, in order)
        #[arg(short, long = "linkedin-text")]
        linkedin_text: Vec<PathBuf>,

        /// Manually entered LinkedIn profile as JSON (takes precedence over OCR text)
        #[arg(short = 'j', long = "linkedin-json")]
        linkedin_json: Option<PathBuf>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a directory with a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Use standard recommendations instead of enhanced ones
        #[arg(long)]
        standard: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}
