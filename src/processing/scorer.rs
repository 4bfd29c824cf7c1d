//! Bounded profile-quality score

use crate::config::ScoringConfig;
use crate::processing::models::{GapAnalysis, LinkedInProfile, ResumeData};
use log::debug;

const HEADLINE_BONUS: i32 = 5;
const ABOUT_BONUS: i32 = 10;
const ABOUT_MIN_CHARS: usize = 100;
const SKILLS_BONUS: i32 = 10;
const SKILLS_MIN_COUNT: usize = 5;
const CERTIFICATIONS_BONUS: i32 = 5;

const SKILLS_GAP_WEIGHT: usize = 20;
const SKILLS_GAP_CAP: usize = 15;
const CERTS_GAP_WEIGHT: usize = 3;
const CERTS_GAP_CAP: usize = 10;
const PROJECTS_GAP_WEIGHT: usize = 3;
const PROJECTS_GAP_CAP: usize = 10;
const THEME_WEIGHT: usize = 2;
const THEME_CAP: usize = 15;

#[derive(Debug, Clone)]
pub struct ProfileScorer {
    config: ScoringConfig,
}

impl Default for ProfileScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ProfileScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Baseline plus completeness bonuses, minus capped gap penalties,
    /// plus a capped theme bonus, clamped to the configured bounds.
    pub fn score(&self, gaps: &GapAnalysis, linkedin: &LinkedInProfile, resume: &ResumeData) -> u8 {
        let mut score = i32::from(self.config.baseline);

        if !linkedin.headline.is_empty() {
            score += HEADLINE_BONUS;
        }
        if linkedin.about.chars().count() > ABOUT_MIN_CHARS {
            score += ABOUT_BONUS;
        }
        if linkedin.skills.len() > SKILLS_MIN_COUNT {
            score += SKILLS_BONUS;
        }
        if !linkedin.certifications.is_empty() {
            score += CERTIFICATIONS_BONUS;
        }

        // Denominator is the resume skill count, not the union.
        let skills_penalty = (SKILLS_GAP_WEIGHT * gaps.skills_missing_from_linkedin.len()
            / resume.skills.len().max(1))
        .min(SKILLS_GAP_CAP);
        let certs_penalty = (CERTS_GAP_WEIGHT * gaps.certifications_missing_from_linkedin.len())
            .min(CERTS_GAP_CAP);
        let projects_penalty = (PROJECTS_GAP_WEIGHT * gaps.projects_missing_from_linkedin.len())
            .min(PROJECTS_GAP_CAP);
        let theme_bonus = (THEME_WEIGHT * gaps.advanced_tech_themes.len()).min(THEME_CAP);

        debug!(
            "Score terms - base+bonuses: {}, skills: -{}, certs: -{}, projects: -{}, themes: +{}",
            score, skills_penalty, certs_penalty, projects_penalty, theme_bonus
        );

        // Every term is capped at 15, so the casts cannot truncate.
        score -= skills_penalty as i32;
        score -= certs_penalty as i32;
        score -= projects_penalty as i32;
        score += theme_bonus as i32;

        // Upper bound wins when the configured bounds are inverted.
        score
            .max(i32::from(self.config.min_score))
            .min(i32::from(self.config.max_score)) as u8
    }
}
