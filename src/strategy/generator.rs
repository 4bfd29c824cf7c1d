//! Assembles a Strategy from gaps, profile, resume and a mode label

use crate::error::Result;
use crate::processing::models::{GapAnalysis, LinkedInProfile, Mode, ResumeData, Strategy};
use crate::processing::scorer::ProfileScorer;
use crate::strategy::provider::{default_provider, RecommendationProvider};
use log::{debug, info};
use std::sync::Arc;

pub struct StrategyGenerator {
    scorer: ProfileScorer,
    provider: Arc<dyn RecommendationProvider>,
}

impl StrategyGenerator {
    pub fn new(scorer: ProfileScorer, provider: Arc<dyn RecommendationProvider>) -> Self {
        debug!("Strategy generator using {} recommendations", provider.name());
        Self { scorer, provider }
    }

    pub fn with_default_provider(scorer: ProfileScorer) -> Self {
        Self::new(scorer, default_provider())
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Validates `mode` before doing any work.
    pub fn generate(
        &self,
        mode: &str,
        gaps: GapAnalysis,
        linkedin: &LinkedInProfile,
        resume: &ResumeData,
    ) -> Result<Strategy> {
        let mode = Mode::parse(mode)?;
        Ok(self.generate_for(mode, gaps, linkedin, resume))
    }

    pub fn generate_for(
        &self,
        mode: Mode,
        gaps: GapAnalysis,
        linkedin: &LinkedInProfile,
        resume: &ResumeData,
    ) -> Strategy {
        let profile_score = self.scorer.score(&gaps, linkedin, resume);
        let immediate_fixes = self.provider.immediate_fixes(&gaps, linkedin, resume);
        let strategic_roadmap = self
            .provider
            .strategic_roadmap(mode, &gaps, linkedin, resume);

        info!(
            "Generated {} strategy - score: {}, fixes: {}, roadmap steps: {}",
            mode,
            profile_score,
            immediate_fixes.len(),
            strategic_roadmap.len()
        );

        Strategy {
            mode,
            profile_score,
            immediate_fixes,
            strategic_roadmap,
            gaps,
        }
    }
}
