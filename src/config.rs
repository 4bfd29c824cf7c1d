//! Configuration management for the LinkedIn strategist

use crate::error::{Result, StrategistError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub scoring: ScoringConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Terms reported as advanced tech themes, matched case-insensitively.
    pub advanced_tech_terms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub baseline: u8,
    pub min_score: u8,
    pub max_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_upload_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub include_metadata: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

pub const DEFAULT_ADVANCED_TECH_TERMS: &[&str] = &[
    "LLM",
    "RPA",
    "Docker",
    "Kubernetes",
    "Cloud Run",
    "CI/CD",
    "Terraform",
    "AI",
    "Machine Learning",
    "Cloud-native",
    "FastAPI",
    "Flutter",
    "Microservices",
    "Serverless",
];

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            advanced_tech_terms: DEFAULT_ADVANCED_TECH_TERMS
                .iter()
                .map(|term| term.to_string())
                .collect(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 70,
            min_score: 0,
            max_score: 100,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            include_metadata: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            scoring: ScoringConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            StrategistError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            StrategistError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("linkedin-strategist")
            .join("config.toml")
    }

    /// Reject score bounds that would make clamping meaningless.
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        if scoring.max_score > 100 {
            return Err(StrategistError::Configuration(format!(
                "scoring.max_score must be at most 100, got {}",
                scoring.max_score
            )));
        }
        if scoring.min_score > scoring.baseline || scoring.baseline > scoring.max_score {
            return Err(StrategistError::Configuration(format!(
                "scoring bounds must satisfy min <= baseline <= max, got {} <= {} <= {}",
                scoring.min_score, scoring.baseline, scoring.max_score
            )));
        }
        if self.input.max_upload_bytes == 0 {
            return Err(StrategistError::Configuration(
                "input.max_upload_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.baseline, 70);
        assert!(config
            .analysis
            .advanced_tech_terms
            .iter()
            .any(|t| t == "CI/CD"));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let mut config = Config::default();
        config.scoring.min_score = 80;
        assert!(matches!(
            config.validate(),
            Err(StrategistError::Configuration(_))
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.analysis.advanced_tech_terms = vec!["Rust".to_string()];
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.analysis.advanced_tech_terms, vec!["Rust".to_string()]);
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
        assert_eq!(loaded.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "analysis = 3").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(StrategistError::Configuration(_))
        ));
    }
}
