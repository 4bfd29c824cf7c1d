//! Records flowing through the strategy pipeline

use crate::error::{Result, StrategistError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// LinkedIn profile as extracted from OCR text or entered manually
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub headline: String,
    pub about: String,
    pub current_role: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub activity_topics: Vec<String>,
}

/// Resume content structured from plain text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    pub experience: Vec<String>,
}

/// Items present in the resume but absent from LinkedIn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub skills_missing_from_linkedin: Vec<String>,
    pub projects_missing_from_linkedin: Vec<String>,
    pub certifications_missing_from_linkedin: Vec<String>,
    pub advanced_tech_themes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "Get Hired")]
    GetHired,
    #[serde(rename = "Grow Connections")]
    GrowConnections,
    #[serde(rename = "Influence Market")]
    InfluenceMarket,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub mode: Mode,
    pub profile_score: u8,
    pub immediate_fixes: Vec<String>,
    pub strategic_roadmap: Vec<String>,
    pub gaps: GapAnalysis,
}

/// Manual profile entry; list fields arrive comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualLinkedInInput {
    pub headline: String,
    pub about: String,
    pub current_role: String,
    pub skills: String,
    pub certifications: String,
}

/// Where the LinkedIn side of an analysis comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkedInSource {
    /// One OCR text block per screenshot, in read order
    OcrText(Vec<String>),
    Manual(ManualLinkedInInput),
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::GetHired, Mode::GrowConnections, Mode::InfluenceMarket];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::GetHired => "Get Hired",
            Mode::GrowConnections => "Grow Connections",
            Mode::InfluenceMarket => "Influence Market",
        }
    }

    /// Exact, case-sensitive parse of a mode label.
    pub fn parse(value: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| {
                let valid: Vec<&str> = Mode::ALL.iter().map(|m| m.as_str()).collect();
                StrategistError::InvalidMode(format!(
                    "'{}'. Must be one of: {}",
                    value,
                    valid.join(", ")
                ))
            })
    }
}

impl FromStr for Mode {
    type Err = StrategistError;

    fn from_str(s: &str) -> Result<Self> {
        Mode::parse(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ManualLinkedInInput {
    pub fn into_profile(self) -> LinkedInProfile {
        LinkedInProfile {
            headline: self.headline.trim().to_string(),
            about: self.about.trim().to_string(),
            current_role: self.current_role.trim().to_string(),
            skills: split_comma_list(&self.skills),
            certifications: split_comma_list(&self.certifications),
            activity_topics: Vec::new(),
        }
    }
}

fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_is_exact() {
        assert_eq!(Mode::parse("Get Hired").unwrap(), Mode::GetHired);
        assert_eq!("Influence Market".parse::<Mode>().unwrap(), Mode::InfluenceMarket);

        for bad in ["get hired", "GET HIRED", "Get Hired ", "", "Invalid Mode"] {
            assert!(matches!(Mode::parse(bad), Err(StrategistError::InvalidMode(_))));
        }
    }

    #[test]
    fn test_mode_serializes_as_label() {
        let json = serde_json::to_string(&Mode::GrowConnections).unwrap();
        assert_eq!(json, "\"Grow Connections\"");
    }

    #[test]
    fn test_manual_input_splits_lists() {
        let input: ManualLinkedInInput = serde_json::from_str(
            r#"{"headline": "  Senior Engineer ", "skills": "Python, Docker,, Kubernetes ", "certifications": "Google Cloud Professional Architect"}"#,
        )
        .unwrap();

        let profile = input.into_profile();
        assert_eq!(profile.headline, "Senior Engineer");
        assert_eq!(profile.skills, vec!["Python", "Docker", "Kubernetes"]);
        assert_eq!(profile.certifications, vec!["Google Cloud Professional Architect"]);
        assert!(profile.about.is_empty());
        assert!(profile.activity_topics.is_empty());
    }

    #[test]
    fn test_empty_profile_is_zero_value() {
        let profile = LinkedInProfile::default();
        assert!(profile.headline.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.activity_topics.is_empty());
    }
}
