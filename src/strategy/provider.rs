//! Recommendation provider seam
//!
//! The generator holds an `Arc<dyn RecommendationProvider>` picked once at
//! construction. Which provider is the default depends on the `enhanced`
//! feature, not on the data being analysed.

use crate::processing::models::{GapAnalysis, LinkedInProfile, Mode, ResumeData};
use std::sync::Arc;

/// Produces immediate fixes and a roadmap from the same inputs.
pub trait RecommendationProvider: Send + Sync {
    /// Short identifier for logs ("standard" | "enhanced")
    fn name(&self) -> &'static str;

    /// Ordered fixes, already capped at this provider's limit.
    fn immediate_fixes(
        &self,
        gaps: &GapAnalysis,
        linkedin: &LinkedInProfile,
        resume: &ResumeData,
    ) -> Vec<String>;

    /// One entry per week.
    fn strategic_roadmap(
        &self,
        mode: Mode,
        gaps: &GapAnalysis,
        linkedin: &LinkedInProfile,
        resume: &ResumeData,
    ) -> Vec<String>;
}

/// Enhanced provider when compiled in, standard otherwise.
pub fn default_provider() -> Arc<dyn RecommendationProvider> {
    #[cfg(feature = "enhanced")]
    {
        Arc::new(crate::strategy::enhanced::EnhancedProvider::new())
    }
    #[cfg(not(feature = "enhanced"))]
    {
        log::warn!("Enhanced recommendations not compiled in, using standard recommendations");
        Arc::new(crate::strategy::standard::StandardProvider::new())
    }
}
