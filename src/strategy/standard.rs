//! Templated recommendations derived directly from gap counts

use crate::processing::models::{GapAnalysis, LinkedInProfile, Mode, ResumeData};
use crate::strategy::provider::RecommendationProvider;

const MAX_FIXES: usize = 5;
const MAX_LISTED_SKILLS: usize = 5;
const MAX_LISTED_CERTIFICATIONS: usize = 3;

#[derive(Debug, Default, Clone)]
pub struct StandardProvider;

impl StandardProvider {
    pub fn new() -> Self {
        Self
    }
}

impl RecommendationProvider for StandardProvider {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn immediate_fixes(
        &self,
        gaps: &GapAnalysis,
        linkedin: &LinkedInProfile,
        resume: &ResumeData,
    ) -> Vec<String> {
        let mut fixes = Vec::new();

        if !gaps.skills_missing_from_linkedin.is_empty() {
            fixes.push(format!(
                "Add skills to LinkedIn: {}",
                first_n(&gaps.skills_missing_from_linkedin, MAX_LISTED_SKILLS)
            ));
        }
        if !gaps.certifications_missing_from_linkedin.is_empty() {
            fixes.push(format!(
                "Show certifications on LinkedIn: {}",
                first_n(&gaps.certifications_missing_from_linkedin, MAX_LISTED_CERTIFICATIONS)
            ));
        }
        if linkedin.about.is_empty() && !resume.projects.is_empty() {
            fixes.push("Populate About section with top projects and outcomes".to_string());
        }
        if linkedin.headline.is_empty() {
            fixes.push("Add a headline with role + domain + proof point".to_string());
        }

        fixes.truncate(MAX_FIXES);
        fixes
    }

    fn strategic_roadmap(
        &self,
        mode: Mode,
        _gaps: &GapAnalysis,
        _linkedin: &LinkedInProfile,
        _resume: &ResumeData,
    ) -> Vec<String> {
        let steps: [&str; 4] = match mode {
            Mode::GetHired => [
                "Week 1: Update headline with target role and key skills",
                "Week 2: Add missing skills and certifications to LinkedIn",
                "Week 3: Publish one project summary highlighting outcomes",
                "Week 4: Apply to 10 roles matching stack and location",
            ],
            Mode::GrowConnections => [
                "Week 1: Identify 10 KOLs in niche and follow",
                "Week 2: Send 5 personalized connection requests",
                "Week 3: Comment daily on KOL posts with specific insights",
                "Week 4: Host a short post summarizing a project lesson",
            ],
            Mode::InfluenceMarket => [
                "Week 1: Draft content calendar from recent projects",
                "Week 2: Publish 2 posts on detected advanced tech themes",
                "Week 3: Share a case study with metrics",
                "Week 4: Run a poll and synthesize learnings",
            ],
        };

        steps.iter().map(|s| s.to_string()).collect()
    }
}

/// Comma-joined first `n` items
pub(crate) fn first_n(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}
