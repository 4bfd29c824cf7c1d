//! LinkedIn strategist: resume gap analysis and profile growth roadmaps

use clap::Parser;
use linkedin_strategist::cli::{self, Cli, Commands, ConfigAction};
use linkedin_strategist::config::Config;
use linkedin_strategist::error::{Result, StrategistError};
use linkedin_strategist::input::InputManager;
use linkedin_strategist::output::{save_report_to_file, suggest_filename, ReportGenerator};
use linkedin_strategist::processing::models::{LinkedInSource, Mode};
use linkedin_strategist::processing::AnalysisEngine;
use linkedin_strategist::strategy::standard::StandardProvider;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(if e.is_client_error() { 2 } else { 1 });
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            mode,
            linkedin_text,
            linkedin_json,
            output,
            save,
            standard,
        } => {
            // Reject a bad mode before touching any files
            Mode::parse(&mode)?;

            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(StrategistError::InvalidInput)?
                }
                None => config.output.format,
            };

            let engine = if standard {
                AnalysisEngine::with_provider(&config, Arc::new(StandardProvider::new()))?
            } else {
                AnalysisEngine::new(&config)?
            };
            info!("Using {} recommendations", engine.provider_name());

            let mut input_manager = InputManager::new(&config.input);

            let linkedin = if let Some(json_path) = &linkedin_json {
                if !linkedin_text.is_empty() {
                    info!("Manual LinkedIn profile provided, ignoring OCR text files");
                }
                LinkedInSource::Manual(input_manager.read_manual_profile(json_path).await?)
            } else if !linkedin_text.is_empty() {
                input_manager.read_linkedin_text(&linkedin_text).await?
            } else {
                return Err(StrategistError::InputUnavailable(
                    "Provide LinkedIn OCR text (--linkedin-text) or a manual profile (--linkedin-json)"
                        .to_string(),
                ));
            };

            let document = input_manager.read_resume(&resume).await?;
            let outcome = engine.run(&mode, &linkedin, &document)?;

            let generator = ReportGenerator::from_config(&config.output);
            let report = generator.generate_report(&outcome.strategy, &output_format)?;

            match save {
                Some(target) => {
                    let file_path = if target.is_dir() {
                        target.join(suggest_filename(
                            &output_format,
                            &resume.to_string_lossy(),
                            true,
                        ))
                    } else {
                        target
                    };
                    save_report_to_file(&report, &file_path)?;
                    println!("✅ Report saved to {}", file_path.display());
                }
                None => println!("{}", report),
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    println!("Advanced Tech Terms: {}", config.analysis.advanced_tech_terms.join(", "));
                    println!("\nScoring:");
                    println!("  Baseline: {}", config.scoring.baseline);
                    println!("  Bounds: {}..={}", config.scoring.min_score, config.scoring.max_score);
                    println!("\nInput:");
                    println!("  Max Upload Size: {} bytes", config.input.max_upload_bytes);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Colors: {}", config.output.color_output);
                    println!("  Metadata: {}", config.output.include_metadata);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
