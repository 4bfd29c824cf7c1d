//! Structuring of resume plain text into skills, projects, certifications and experience

use crate::input::file_detector::ResumeFormat;
use crate::processing::field_extractor::{non_blank_lines, ListPatterns, CERTIFICATION_LABELS};
use crate::processing::models::ResumeData;
use log::{debug, info};

/// Decoded resume text together with the format it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub text: String,
    pub format: ResumeFormat,
}

impl ResumeDocument {
    pub fn new(text: impl Into<String>, format: ResumeFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}

const SKILL_KEYWORDS: &[&str] = &["skills", "technologies", "tools"];
const PROJECT_KEYWORDS: &[&str] = &["projects", "experience", "work"];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work"];
const MIN_DESCRIPTION_WORDS: usize = 3;

#[derive(Debug, Clone)]
pub struct ResumeStructurer {
    skill_sections: ListPatterns,
    certification_sections: ListPatterns,
}

impl Default for ResumeStructurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStructurer {
    pub fn new() -> Self {
        Self {
            skill_sections: ListPatterns::new(&["Skills"]),
            certification_sections: ListPatterns::new(CERTIFICATION_LABELS),
        }
    }

    pub fn structure(&self, document: &ResumeDocument) -> ResumeData {
        let text = document.text.as_str();

        let data = ResumeData {
            skills: self.extract_skills(text),
            projects: keyword_lines(text, PROJECT_KEYWORDS, MIN_DESCRIPTION_WORDS),
            certifications: self.certification_sections.extract(text),
            experience: keyword_lines(text, EXPERIENCE_KEYWORDS, MIN_DESCRIPTION_WORDS),
        };

        info!(
            "Extracted from {} resume - skills: {}, projects: {}, certs: {}",
            document.format,
            data.skills.len(),
            data.projects.len(),
            data.certifications.len()
        );
        debug!("Experience lines: {}", data.experience.len());

        data
    }

    fn extract_skills(&self, text: &str) -> Vec<String> {
        let skills = self.skill_sections.extract(text);
        if !skills.is_empty() {
            return skills;
        }
        keyword_lines(text, SKILL_KEYWORDS, 1)
    }
}

/// Lines mentioning any keyword (case-insensitive) with at least `min_words` tokens.
pub fn keyword_lines(text: &str, keywords: &[&str], min_words: usize) -> Vec<String> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    non_blank_lines(text)
        .filter(|line| {
            let lowered = line.to_lowercase();
            keywords.iter().any(|k| lowered.contains(k.as_str()))
                && line.split_whitespace().count() >= min_words
        })
        .map(str::to_string)
        .collect()
}
