//! Heuristic field extraction from LinkedIn OCR text

use crate::processing::models::LinkedInProfile;
use log::{debug, info};
use regex::Regex;

const MAX_ACTIVITY_TOPICS: usize = 10;
const MIN_ACTIVITY_WORDS: usize = 3;

pub const SKILL_LABELS: &[&str] = &["Skills", "Skill"];
pub const CERTIFICATION_LABELS: &[&str] = &["Certifications", "Certification"];

/// Pulls profile fields out of the concatenated OCR text of a screenshot batch.
pub struct FieldExtractor {
    current_role_regex: Regex,
    about_section: SectionPattern,
    skill_sections: ListPatterns,
    certification_sections: ListPatterns,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        let current_role_regex =
            Regex::new(r"(?i)(?:Current|Role)[:\s]+(.+)").expect("Invalid current role regex");

        Self {
            current_role_regex,
            about_section: SectionPattern::new("About"),
            skill_sections: ListPatterns::new(SKILL_LABELS),
            certification_sections: ListPatterns::new(CERTIFICATION_LABELS),
        }
    }

    /// Build a profile from OCR text. Missing fields stay empty.
    pub fn extract_profile(&self, text: &str) -> LinkedInProfile {
        if text.trim().is_empty() {
            info!("No LinkedIn text available, returning empty profile");
            return LinkedInProfile::default();
        }

        let profile = LinkedInProfile {
            headline: extract_headline(text),
            about: self.about_section.extract(text),
            current_role: self.extract_current_role(text),
            skills: self.skill_sections.extract(text),
            certifications: self.certification_sections.extract(text),
            activity_topics: extract_activity_topics(text),
        };

        info!(
            "Extracted profile - headline: {}, about: {} chars, skills: {}",
            !profile.headline.is_empty(),
            profile.about.chars().count(),
            profile.skills.len()
        );
        debug!(
            "Profile certifications: {}, activity topics: {}",
            profile.certifications.len(),
            profile.activity_topics.len()
        );

        profile
    }

    /// Text following "Current" or "Role" up to the end of that line
    pub fn extract_current_role(&self, text: &str) -> String {
        self.current_role_regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}

/// First non-blank line, trimmed
pub fn extract_headline(text: &str) -> String {
    non_blank_lines(text).next().unwrap_or_default().to_string()
}

/// Body of the section introduced by `title`, up to the next blank line or end of text.
pub fn extract_section(text: &str, title: &str) -> String {
    SectionPattern::new(title).extract(text)
}

/// Comma or newline separated items under the first label that matches.
pub fn extract_list(text: &str, labels: &[&str]) -> Vec<String> {
    ListPatterns::new(labels).extract(text)
}

/// Multi-word lines, which in profile screenshots are mostly posts and activity.
pub fn extract_activity_topics(text: &str) -> Vec<String> {
    non_blank_lines(text)
        .filter(|line| line.split_whitespace().count() >= MIN_ACTIVITY_WORDS)
        .take(MAX_ACTIVITY_TOPICS)
        .map(str::to_string)
        .collect()
}

/// Trimmed lines with blank ones removed.
pub(crate) fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Compiled `<title>:` section pattern.
#[derive(Debug, Clone)]
pub struct SectionPattern {
    regex: Regex,
}

impl SectionPattern {
    pub fn new(title: &str) -> Self {
        // Lazy body, stops at the first blank line; `$` is end of text (no multi-line flag).
        let pattern = format!(r"(?is){}[:\n]+(.+?)(?:\n\n|$)", regex::escape(title));
        let regex = Regex::new(&pattern).expect("Invalid section regex");

        Self { regex }
    }

    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Trimmed section body, or empty when the title is absent.
    pub fn extract(&self, text: &str) -> String {
        self.capture(text)
            .map(|body| body.trim().to_string())
            .unwrap_or_default()
    }
}

/// Section patterns for alternative labels, tried in order.
#[derive(Debug, Clone)]
pub struct ListPatterns {
    sections: Vec<SectionPattern>,
}

impl ListPatterns {
    pub fn new(labels: &[&str]) -> Self {
        Self {
            sections: labels.iter().map(|label| SectionPattern::new(label)).collect(),
        }
    }

    /// Items of the first matching section, split on commas and newlines.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.sections
            .iter()
            .find_map(|section| section.capture(text))
            .map(|raw| {
                raw.split(|c| c == ',' || c == '\n')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_TEXT: &str = "Jane Smith\n\
Senior Software Engineer | Cloud & AI Specialist\n\
Current: Staff Engineer at Tech Corp\n\
\n\
About\n\
Passionate engineer building cloud-native systems.\n\
Let's connect!\n\
\n\
Skills: Python, Docker, Kubernetes\n\
\n\
Certifications\n\
Google Cloud Professional Architect\n\
CompTIA Security+\n\
\n\
Shared a post about scaling Kubernetes clusters\n";

    #[test]
    fn test_extract_headline() {
        let text = "Senior Software Engineer\nMore text here\nAnd more";
        assert_eq!(extract_headline(text), "Senior Software Engineer");
        assert_eq!(extract_headline("\n   \n  Lead Dev  \nnext"), "Lead Dev");
    }

    #[test]
    fn test_extract_headline_empty() {
        assert_eq!(extract_headline(""), "");
        assert_eq!(extract_headline("  \n\t\n"), "");
    }

    #[test]
    fn test_extract_section_multiline() {
        let text = "About:\nThis is the about section\nIt has multiple lines\n\nNext Section";
        assert_eq!(
            extract_section(text, "About"),
            "This is the about section\nIt has multiple lines"
        );
    }

    #[test]
    fn test_extract_section_case_insensitive_to_end_of_text() {
        let text = "header\nABOUT:\nbuilt things\nshipped things";
        assert_eq!(extract_section(text, "About"), "built things\nshipped things");
        assert_eq!(extract_section(text, "Experience"), "");
    }

    #[test]
    fn test_extract_list() {
        let text = "Skills:\nPython, Docker, Kubernetes\n\n";
        assert_eq!(
            extract_list(text, &["Skills"]),
            vec!["Python", "Docker", "Kubernetes"]
        );
    }

    #[test]
    fn test_extract_list_newline_separated_keeps_duplicates() {
        let text = "Certifications:\nCert A\nCert B\nCert A\n\n";
        assert_eq!(
            extract_list(text, &["Certifications"]),
            vec!["Cert A", "Cert B", "Cert A"]
        );
    }

    #[test]
    fn test_extract_list_falls_through_labels() {
        let text = "Certification: AWS Solutions Architect\n\n";
        assert_eq!(
            extract_list(text, CERTIFICATION_LABELS),
            vec!["AWS Solutions Architect"]
        );
        assert!(extract_list(text, &["Languages"]).is_empty());
    }

    #[test]
    fn test_compiled_patterns_reused_across_texts() {
        let skills = ListPatterns::new(SKILL_LABELS);
        assert_eq!(skills.extract("Skills: Rust, Go\n\nOther"), vec!["Rust", "Go"]);
        assert_eq!(skills.extract("Skill:\nTerraform"), vec!["Terraform"]);
        assert!(skills.extract("no labels here").is_empty());

        let about = SectionPattern::new("About");
        assert_eq!(about.extract("About:\nBuilds platforms\n\nSkills"), "Builds platforms");
        assert_eq!(about.capture("nothing"), None);
    }

    #[test]
    fn test_extract_activity_topics_capped() {
        let text: String = (0..15)
            .map(|i| format!("post number {} about things\nshort\n", i))
            .collect();
        let topics = extract_activity_topics(&text);

        assert_eq!(topics.len(), 10);
        assert_eq!(topics[0], "post number 0 about things");
        assert_eq!(topics[9], "post number 9 about things");
    }

    #[test]
    fn test_extract_current_role() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_current_role("Name\ncurrent: Staff Engineer at Tech Corp\nmore"),
            "Staff Engineer at Tech Corp"
        );
        assert_eq!(extractor.extract_current_role("Role Platform Lead"), "Platform Lead");
        assert_eq!(extractor.extract_current_role("nothing here"), "");
    }

    #[test]
    fn test_extract_profile() {
        let profile = FieldExtractor::new().extract_profile(PROFILE_TEXT);

        assert_eq!(profile.headline, "Jane Smith");
        assert_eq!(
            profile.about,
            "Passionate engineer building cloud-native systems.\nLet's connect!"
        );
        assert_eq!(profile.current_role, "Staff Engineer at Tech Corp");
        assert_eq!(profile.skills, vec!["Python", "Docker", "Kubernetes"]);
        assert_eq!(
            profile.certifications,
            vec!["Google Cloud Professional Architect", "CompTIA Security+"]
        );
        assert!(profile
            .activity_topics
            .contains(&"Shared a post about scaling Kubernetes clusters".to_string()));
    }

    #[test]
    fn test_extract_profile_from_blank_text() {
        let profile = FieldExtractor::new().extract_profile("   \n\n");
        assert_eq!(profile, LinkedInProfile::default());
    }
}
