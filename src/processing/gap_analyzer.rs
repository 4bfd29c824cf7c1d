//! Resume vs LinkedIn gap analysis and advanced tech theme detection

use crate::error::{Result, StrategistError};
use crate::processing::models::{GapAnalysis, LinkedInProfile, ResumeData};
use aho_corasick::AhoCorasick;
use log::info;
use std::collections::BTreeSet;

/// Computes what the resume shows that LinkedIn does not.
pub struct GapAnalyzer {
    theme_matcher: AhoCorasick,
    vocabulary: Vec<String>,
}

impl GapAnalyzer {
    /// Build an analyzer that reports themes from `vocabulary`.
    pub fn new(vocabulary: Vec<String>) -> Result<Self> {
        // Patterns and haystack are both lower-cased, which covers non-ASCII terms.
        // Standard match kind so overlapping terms are all reported.
        let lowered: Vec<String> = vocabulary.iter().map(|term| term.to_lowercase()).collect();
        let theme_matcher = AhoCorasick::builder()
            .build(&lowered)
            .map_err(|e| {
                StrategistError::Configuration(format!("Failed to build theme matcher: {}", e))
            })?;

        Ok(Self {
            theme_matcher,
            vocabulary,
        })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn analyze(&self, linkedin: &LinkedInProfile, resume: &ResumeData) -> GapAnalysis {
        let skills_missing = missing_from(&resume.skills, &linkedin.skills);
        let projects_missing = missing_from(&resume.projects, &linkedin.activity_topics);
        let certs_missing = missing_from(&resume.certifications, &linkedin.certifications);

        let combined_text = [
            linkedin.about.clone(),
            resume.projects.join(" "),
            resume.skills.join(" "),
        ]
        .join("\n");
        let advanced_themes = self.detect_advanced_themes(&combined_text);

        info!(
            "Gap analysis complete - missing skills: {}, missing projects: {}, missing certs: {}, tech themes: {}",
            skills_missing.len(),
            projects_missing.len(),
            certs_missing.len(),
            advanced_themes.len()
        );

        GapAnalysis {
            skills_missing_from_linkedin: skills_missing,
            projects_missing_from_linkedin: projects_missing,
            certifications_missing_from_linkedin: certs_missing,
            advanced_tech_themes: advanced_themes,
        }
    }

    /// Vocabulary terms contained in `text`, sorted and in vocabulary casing.
    pub fn detect_advanced_themes(&self, text: &str) -> Vec<String> {
        let found: BTreeSet<&str> = self
            .theme_matcher
            .find_overlapping_iter(&text.to_lowercase())
            .map(|mat| self.vocabulary[mat.pattern().as_usize()].as_str())
            .collect();

        found.into_iter().map(str::to_string).collect()
    }
}

/// Trim and lower-case, dropping entries that end up empty.
pub fn normalize_all<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

fn missing_from<S: AsRef<str>>(resume_side: &[S], linkedin_side: &[S]) -> Vec<String> {
    let resume_set: BTreeSet<String> = normalize_all(resume_side).into_iter().collect();
    let linkedin_set: BTreeSet<String> = normalize_all(linkedin_side).into_iter().collect();

    resume_set.difference(&linkedin_set).cloned().collect()
}
