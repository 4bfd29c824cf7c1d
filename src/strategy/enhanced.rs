//! Profile-quality recommendations: headline, About and skills tips plus
//! All-Star completeness assessment.

use crate::processing::models::{GapAnalysis, LinkedInProfile, Mode, ResumeData};
use crate::strategy::provider::RecommendationProvider;
use crate::strategy::standard::first_n;
use serde::{Deserialize, Serialize};

const MAX_FIXES: usize = 6;
const HEADLINE_TIPS_TAKEN: usize = 2;
const ABOUT_TIPS_TAKEN: usize = 2;
const SKILLS_TIPS_TAKEN: usize = 1;

const HEADLINE_MIN_CHARS: usize = 50;
const ABOUT_TARGET_CHARS: usize = 1500;
const ABOUT_HOOK_CHECK_CHARS: usize = 300;
const ABOUT_HOOK_MAX_CHARS: usize = 150;
const ABOUT_MIN_SKILL_MENTIONS: usize = 5;
const OPTIMAL_SKILLS: usize = 50;
const ALL_STAR_MIN_SKILLS: usize = 5;
const COMPLETE_THRESHOLD: u8 = 80;

const VALUE_INDICATORS: [&str; 6] = [
    "driving",
    "building",
    "leading",
    "growing",
    "transforming",
    "delivering",
];

/// Completeness against the All-Star bar and a stricter "beyond" bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessAssessment {
    pub all_star_score: u8,
    pub beyond_all_star_score: u8,
    pub is_all_star: bool,
    pub is_beyond_all_star: bool,
}

pub fn assess_completeness(linkedin: &LinkedInProfile) -> CompletenessAssessment {
    let all_star = [
        !linkedin.headline.is_empty(),
        !linkedin.about.is_empty(),
        linkedin.skills.len() >= ALL_STAR_MIN_SKILLS,
    ];
    let beyond = [
        linkedin.headline.chars().count() > HEADLINE_MIN_CHARS,
        linkedin.about.chars().count() >= ABOUT_TARGET_CHARS,
        linkedin.skills.len() >= OPTIMAL_SKILLS,
        !linkedin.certifications.is_empty(),
    ];

    let all_star_score = percent_met(&all_star);
    let beyond_all_star_score = percent_met(&beyond);

    CompletenessAssessment {
        all_star_score,
        beyond_all_star_score,
        is_all_star: all_star_score >= COMPLETE_THRESHOLD,
        is_beyond_all_star: beyond_all_star_score >= COMPLETE_THRESHOLD,
    }
}

fn percent_met(checks: &[bool]) -> u8 {
    let met = checks.iter().filter(|c| **c).count();
    (met * 100 / checks.len().max(1)) as u8
}

pub fn headline_tips(headline: &str, skills: &[String], current_role: &str) -> Vec<String> {
    let mut tips = Vec::new();

    if headline.chars().count() < HEADLINE_MIN_CHARS {
        tips.push(
            "Create a compelling headline using formula: [Role] | [Key Expertise] | [Value Proposition]"
                .to_string(),
        );
    }

    if !current_role.is_empty() && !headline.contains(current_role) {
        tips.push(format!(
            "Include your current role '{}' in headline for searchability",
            current_role
        ));
    }

    let headline_lower = headline.to_lowercase();
    let missing: Vec<String> = skills
        .iter()
        .take(3)
        .filter(|skill| !headline_lower.contains(&skill.to_lowercase()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        tips.push(format!("Add key skills to headline: {}", first_n(&missing, 2)));
    }

    if !VALUE_INDICATORS
        .iter()
        .any(|word| headline_lower.contains(word))
    {
        tips.push(
            "Add a value proposition showing impact (e.g., 'Driving 0→1 Products to $10M ARR')"
                .to_string(),
        );
    }

    tips
}

pub fn about_tips(about: &str, skills: &[String]) -> Vec<String> {
    let mut tips = Vec::new();
    let length = about.chars().count();

    if length == 0 {
        tips.push(
            "Write an About section (1,500-2,000 characters) using structure: Hook → Who You Are → Achievements → Skills → CTA"
                .to_string(),
        );
    } else if length < ABOUT_TARGET_CHARS {
        tips.push(format!(
            "Expand About section to 1,500+ characters (currently {}). Add achievements and skills list",
            length
        ));
    }

    if length > ABOUT_HOOK_CHECK_CHARS {
        let first_line_chars = match about.split_once('\n') {
            Some((first, _)) => first.chars().count(),
            None => about.chars().take(ABOUT_HOOK_CHECK_CHARS).count(),
        };
        if first_line_chars > ABOUT_HOOK_MAX_CHARS {
            tips.push(
                "Start About section with a compelling one-liner (shows in preview before 'see more')"
                    .to_string(),
            );
        }
    }

    let about_lower = about.to_lowercase();
    if !skills.is_empty() && length > 0 {
        let mentioned = skills
            .iter()
            .filter(|skill| about_lower.contains(&skill.to_lowercase()))
            .count();
        if mentioned < ABOUT_MIN_SKILL_MENTIONS.min(skills.len()) {
            tips.push(
                "Add a 'Key skills:' section at the end of About listing your core competencies"
                    .to_string(),
            );
        }
    }

    if length > 0 && !about_lower.contains("email") && !about_lower.contains("connect") {
        tips.push(
            "Add a call-to-action at the end (e.g., 'Let's connect! Reach me at [email]')".to_string(),
        );
    }

    tips
}

pub fn skills_tips(linkedin_skills: &[String], resume_skills: &[String]) -> Vec<String> {
    let mut tips = Vec::new();
    let count = linkedin_skills.len();

    if count == 0 {
        tips.push(format!(
            "Add skills to LinkedIn Skills section (aim for {} total)",
            OPTIMAL_SKILLS
        ));
    } else if count < OPTIMAL_SKILLS {
        tips.push(format!(
            "Increase skills count from {} to {} (use all available slots)",
            count, OPTIMAL_SKILLS
        ));
    }

    let on_linkedin: Vec<String> = linkedin_skills.iter().map(|s| s.to_lowercase()).collect();
    let missing: Vec<String> = resume_skills
        .iter()
        .filter(|skill| !on_linkedin.contains(&skill.to_lowercase()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        tips.push(format!(
            "Transfer skills from resume to LinkedIn: {}",
            first_n(&missing, 5)
        ));
    }

    tips
}

#[derive(Debug, Default, Clone)]
pub struct EnhancedProvider;

impl EnhancedProvider {
    pub fn new() -> Self {
        Self
    }
}

impl RecommendationProvider for EnhancedProvider {
    fn name(&self) -> &'static str {
        "enhanced"
    }

    fn immediate_fixes(
        &self,
        gaps: &GapAnalysis,
        linkedin: &LinkedInProfile,
        resume: &ResumeData,
    ) -> Vec<String> {
        let mut fixes = Vec::new();

        fixes.extend(
            headline_tips(&linkedin.headline, &resume.skills, &linkedin.current_role)
                .into_iter()
                .take(HEADLINE_TIPS_TAKEN),
        );
        fixes.extend(
            about_tips(&linkedin.about, &resume.skills)
                .into_iter()
                .take(ABOUT_TIPS_TAKEN),
        );
        fixes.extend(
            skills_tips(&linkedin.skills, &resume.skills)
                .into_iter()
                .take(SKILLS_TIPS_TAKEN),
        );

        if !gaps.certifications_missing_from_linkedin.is_empty() {
            fixes.push(format!(
                "Add certifications to LinkedIn: {}",
                first_n(&gaps.certifications_missing_from_linkedin, 3)
            ));
        }

        fixes.truncate(MAX_FIXES);
        fixes
    }

    fn strategic_roadmap(
        &self,
        mode: Mode,
        _gaps: &GapAnalysis,
        linkedin: &LinkedInProfile,
        _resume: &ResumeData,
    ) -> Vec<String> {
        let steps: [&str; 5] = match mode {
            Mode::GetHired => {
                let final_week = if assess_completeness(linkedin).is_all_star {
                    "Week 5: Enable 'Open to Work' (recruiters only) and apply to 10 targeted roles"
                } else {
                    "Week 5: Complete All-Star profile requirements before activating 'Open to Work'"
                };
                [
                    "Week 1: Optimize headline with target role + key skills + value proposition",
                    "Week 2: Write compelling About section (1,500+ chars) with hook, achievements, skills list",
                    "Week 3: Add all missing skills and certifications (aim for 50 total skills)",
                    "Week 4: Add rich media to Experience section and request 5 recommendations",
                    final_week,
                ]
            }
            Mode::GrowConnections => [
                "Week 1: Optimize profile for searchability (headline, About, skills with keywords)",
                "Week 2: Identify 10 KOLs in your niche and analyze their content themes",
                "Week 3: Send 5 personalized connection requests referencing specific content",
                "Week 4: Comment daily on KOL posts with insights (not just 'Great post!')",
                "Week 5: Publish your first post sharing a professional lesson or project insight",
            ],
            Mode::InfluenceMarket => [
                "Week 1: Optimize profile as your content portfolio (Featured section + rich media)",
                "Week 2: Create content calendar from recent projects and detected tech themes",
                "Week 3: Publish 2 posts on advanced tech topics with specific examples",
                "Week 4: Share a detailed case study with metrics and outcomes",
                "Week 5: Engage with comments and track post analytics to refine strategy",
            ],
        };

        steps.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn optimized_about() -> String {
        let mut about = String::from("I help platform teams ship faster with Python and Docker.\n");
        while about.chars().count() < 1500 {
            about.push_str("Led migrations, mentored engineers and cut deploy times in half. ");
        }
        about.push_str("\nKey skills: Python, Docker. Let's connect!");
        about
    }

    #[test]
    fn test_empty_about_gets_write_tip() {
        let tips = about_tips("", &[]);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].starts_with("Write an About section (1,500-2,000 characters)"));
    }

    #[test]
    fn test_short_about_reports_length_and_cta() {
        let tips = about_tips("Engineer who likes Rust", &strings(&["Rust"]));
        assert_eq!(
            tips,
            strings(&[
                "Expand About section to 1,500+ characters (currently 23). Add achievements and skills list",
                "Add a call-to-action at the end (e.g., 'Let's connect! Reach me at [email]')",
            ])
        );
    }

    #[test]
    fn test_optimized_about_needs_nothing() {
        let tips = about_tips(&optimized_about(), &strings(&["Python", "Docker"]));
        assert!(tips.is_empty(), "unexpected tips: {:?}", tips);
    }

    #[test]
    fn test_long_first_line_needs_hook() {
        let about = format!("{} connect", "word ".repeat(80));
        let tips = about_tips(&about, &[]);
        assert!(tips
            .iter()
            .any(|t| t.starts_with("Start About section with a compelling one-liner")));
    }

    #[test]
    fn test_unmentioned_skills_need_key_skills_section() {
        let about = "Platform engineer. Email me anytime.";
        let tips = about_tips(about, &strings(&["Go", "Kafka", "Terraform"]));
        assert!(tips
            .iter()
            .any(|t| t.starts_with("Add a 'Key skills:' section")));
        assert!(!tips.iter().any(|t| t.starts_with("Add a call-to-action")));
    }

    #[test]
    fn test_headline_tips() {
        let tips = headline_tips("Engineer", &strings(&["Python", "Docker", "AWS"]), "Staff Engineer");
        assert_eq!(
            tips,
            strings(&[
                "Create a compelling headline using formula: [Role] | [Key Expertise] | [Value Proposition]",
                "Include your current role 'Staff Engineer' in headline for searchability",
                "Add key skills to headline: Python, Docker",
                "Add a value proposition showing impact (e.g., 'Driving 0→1 Products to $10M ARR')",
            ])
        );
    }

    #[test]
    fn test_strong_headline_has_no_tips() {
        let headline = "Staff Engineer | Python, Docker, AWS | Building reliable cloud platforms at scale";
        let tips = headline_tips(headline, &strings(&["python", "docker", "aws"]), "Staff Engineer");
        assert!(tips.is_empty());
    }

    #[test]
    fn test_skills_tips() {
        assert_eq!(
            skills_tips(&[], &[]),
            strings(&["Add skills to LinkedIn Skills section (aim for 50 total)"])
        );
        assert_eq!(
            skills_tips(&strings(&["Python"]), &strings(&["python", "Go"])),
            strings(&[
                "Increase skills count from 1 to 50 (use all available slots)",
                "Transfer skills from resume to LinkedIn: Go",
            ])
        );
    }

    #[test]
    fn test_completeness_assessment() {
        let empty = assess_completeness(&LinkedInProfile::default());
        assert_eq!(empty.all_star_score, 0);
        assert!(!empty.is_all_star);

        let partial = LinkedInProfile {
            headline: "Engineer".to_string(),
            about: "Hello".to_string(),
            skills: strings(&["a", "b", "c", "d", "e"]),
            certifications: strings(&["AWS"]),
            ..Default::default()
        };
        let assessment = assess_completeness(&partial);
        assert_eq!(assessment.all_star_score, 100);
        assert!(assessment.is_all_star);
        assert_eq!(assessment.beyond_all_star_score, 25);
        assert!(!assessment.is_beyond_all_star);
    }

    #[test]
    fn test_fixes_are_capped() {
        let gaps = GapAnalysis {
            certifications_missing_from_linkedin: strings(&["aws", "cka"]),
            ..Default::default()
        };
        let linkedin = LinkedInProfile {
            current_role: "Engineer".to_string(),
            ..Default::default()
        };
        let resume = ResumeData {
            skills: strings(&["Python", "Docker"]),
            ..Default::default()
        };

        let fixes = EnhancedProvider::new().immediate_fixes(&gaps, &linkedin, &resume);
        assert_eq!(fixes.len(), 5);
        assert!(fixes[0].starts_with("Create a compelling headline"));
        assert!(fixes[1].starts_with("Include your current role 'Engineer'"));
        assert!(fixes[2].starts_with("Write an About section"));
        assert_eq!(fixes[3], "Add skills to LinkedIn Skills section (aim for 50 total)");
        assert_eq!(fixes[4], "Add certifications to LinkedIn: aws, cka");
        assert!(fixes.len() <= MAX_FIXES);
    }

    #[test]
    fn test_get_hired_final_week_depends_on_all_star() {
        let provider = EnhancedProvider::new();
        let roadmap = provider.strategic_roadmap(
            Mode::GetHired,
            &GapAnalysis::default(),
            &LinkedInProfile::default(),
            &ResumeData::default(),
        );
        assert_eq!(roadmap.len(), 5);
        assert!(roadmap[4].contains("Complete All-Star profile requirements"));

        let complete = LinkedInProfile {
            headline: "Engineer".to_string(),
            about: "Hello".to_string(),
            skills: strings(&["a", "b", "c", "d", "e"]),
            ..Default::default()
        };
        let roadmap = provider.strategic_roadmap(
            Mode::GetHired,
            &GapAnalysis::default(),
            &complete,
            &ResumeData::default(),
        );
        assert!(roadmap[4].contains("Enable 'Open to Work'"));
    }

    #[test]
    fn test_roadmaps_have_five_weeks() {
        let provider = EnhancedProvider::new();
        for mode in Mode::ALL {
            let roadmap = provider.strategic_roadmap(
                mode,
                &GapAnalysis::default(),
                &LinkedInProfile::default(),
                &ResumeData::default(),
            );
            assert_eq!(roadmap.len(), 5);
            assert!(roadmap[0].starts_with("Week 1:"));
        }
    }
}
