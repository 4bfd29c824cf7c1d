//! Main analysis engine: profile extraction, resume structuring, gap analysis and strategy

use crate::config::Config;
use crate::error::{Result, StrategistError};
use crate::processing::field_extractor::FieldExtractor;
use crate::processing::gap_analyzer::GapAnalyzer;
use crate::processing::models::{LinkedInProfile, LinkedInSource, Mode, ResumeData, Strategy};
use crate::processing::resume_structurer::{ResumeDocument, ResumeStructurer};
use crate::processing::scorer::ProfileScorer;
use crate::strategy::{default_provider, RecommendationProvider, StrategyGenerator};
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Coordinates every stage of a single analysis run
pub struct AnalysisEngine {
    field_extractor: FieldExtractor,
    resume_structurer: ResumeStructurer,
    gap_analyzer: GapAnalyzer,
    strategy_generator: StrategyGenerator,
}

/// Final strategy plus the intermediate records it was built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub linkedin: LinkedInProfile,
    pub resume: ResumeData,
    pub strategy: Strategy,
    pub processing_time_ms: u64,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_provider(config, default_provider())
    }

    pub fn with_provider(config: &Config, provider: Arc<dyn RecommendationProvider>) -> Result<Self> {
        let gap_analyzer = GapAnalyzer::new(config.analysis.advanced_tech_terms.clone())?;
        let scorer = ProfileScorer::new(config.scoring);

        Ok(Self {
            field_extractor: FieldExtractor::new(),
            resume_structurer: ResumeStructurer::new(),
            gap_analyzer,
            strategy_generator: StrategyGenerator::new(scorer, provider),
        })
    }

    pub fn provider_name(&self) -> &'static str {
        self.strategy_generator.provider_name()
    }

    pub fn run(
        &self,
        mode: &str,
        linkedin: &LinkedInSource,
        resume: &ResumeDocument,
    ) -> Result<AnalysisOutcome> {
        let mode = Mode::parse(mode)?;
        let start_time = Instant::now();

        info!("Starting {} analysis", mode);

        let profile = self.profile_from(linkedin)?;
        let resume_data = self.resume_structurer.structure(resume);
        let gaps = self.gap_analyzer.analyze(&profile, &resume_data);
        let strategy = self
            .strategy_generator
            .generate_for(mode, gaps, &profile, &resume_data);

        let processing_time = start_time.elapsed();
        info!("Analysis completed in {:.2}ms", processing_time.as_secs_f64() * 1000.0);

        Ok(AnalysisOutcome {
            linkedin: profile,
            resume: resume_data,
            strategy,
            processing_time_ms: processing_time.as_millis() as u64,
        })
    }

    fn profile_from(&self, source: &LinkedInSource) -> Result<LinkedInProfile> {
        match source {
            LinkedInSource::OcrText(blocks) => {
                if blocks.is_empty() {
                    return Err(StrategistError::InputUnavailable(
                        "No LinkedIn screenshots or profile data provided".to_string(),
                    ));
                }
                Ok(self.field_extractor.extract_profile(&blocks.join("\n")))
            }
            LinkedInSource::Manual(manual) => Ok(manual.clone().into_profile()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::ResumeFormat;
    use crate::processing::models::ManualLinkedInInput;
    use crate::strategy::standard::StandardProvider;

    const OCR_TEXT: &str = "Senior Software Engineer | Cloud Platforms\n\nAbout\nI build cloud platforms with Docker and Kubernetes for fast-moving teams.\n\nSkills: Python, Docker\n\nCurrent: Senior Software Engineer at Acme";

    const RESUME_TEXT: &str = "Jane Doe\nSkills: Python, Docker, Kubernetes, Terraform\n\nProjects\nBuilt a Terraform platform for 40 services\n";

    fn resume() -> ResumeDocument {
        ResumeDocument::new(RESUME_TEXT, ResumeFormat::Txt)
    }

    #[test]
    fn test_run_with_ocr_text() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let source = LinkedInSource::OcrText(vec![OCR_TEXT.to_string()]);

        let outcome = engine.run("Get Hired", &source, &resume()).unwrap();

        assert_eq!(outcome.linkedin.skills, vec!["Python", "Docker"]);
        assert_eq!(outcome.linkedin.current_role, "Senior Software Engineer at Acme");
        assert_eq!(outcome.strategy.mode, Mode::GetHired);
        assert_eq!(
            outcome.strategy.gaps.skills_missing_from_linkedin,
            vec!["kubernetes", "terraform"]
        );
        assert!(outcome
            .strategy
            .gaps
            .advanced_tech_themes
            .contains(&"Terraform".to_string()));
        assert!(outcome.strategy.profile_score <= 100);
    }

    #[test]
    fn test_blocks_are_joined_in_order() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let source = LinkedInSource::OcrText(vec![
            "Staff Engineer".to_string(),
            "Skills: Rust, Go".to_string(),
        ]);

        let outcome = engine.run("Grow Connections", &source, &resume()).unwrap();
        assert_eq!(outcome.linkedin.headline, "Staff Engineer");
        assert_eq!(outcome.linkedin.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_run_with_manual_profile() {
        let engine =
            AnalysisEngine::with_provider(&Config::default(), Arc::new(StandardProvider::new())).unwrap();
        let source = LinkedInSource::Manual(ManualLinkedInInput {
            headline: "Platform Engineer".to_string(),
            skills: "Python, Docker, Kubernetes, Terraform".to_string(),
            ..Default::default()
        });

        let outcome = engine.run("Influence Market", &source, &resume()).unwrap();
        assert!(outcome.strategy.gaps.skills_missing_from_linkedin.is_empty());
        assert_eq!(outcome.strategy.strategic_roadmap.len(), 4);
        assert_eq!(engine.provider_name(), "standard");
    }

    #[test]
    fn test_invalid_mode_checked_first() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let result = engine.run("Invalid Mode", &LinkedInSource::OcrText(Vec::new()), &resume());
        assert!(matches!(result, Err(StrategistError::InvalidMode(_))));
    }

    #[test]
    fn test_no_linkedin_blocks_is_unavailable() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let result = engine.run("Get Hired", &LinkedInSource::OcrText(Vec::new()), &resume());
        assert!(matches!(result, Err(StrategistError::InputUnavailable(_))));
    }

    #[test]
    fn test_empty_inputs_score_baseline() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let outcome = engine
            .run(
                "Get Hired",
                &LinkedInSource::OcrText(vec![String::new()]),
                &ResumeDocument::new("", ResumeFormat::Txt),
            )
            .unwrap();

        assert_eq!(outcome.strategy.profile_score, 70);
        let expected_steps = if cfg!(feature = "enhanced") { 5 } else { 4 };
        assert_eq!(outcome.strategy.strategic_roadmap.len(), expected_steps);
    }
}
