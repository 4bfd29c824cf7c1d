//! Output formatters for strategy reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, StrategistError};
use crate::processing::models::{Mode, Strategy};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const MAX_LISTED_SKILLS: usize = 10;
const MAX_LISTED_PROJECTS: usize = 3;
const PROJECTED_GAIN: u8 = 35;

/// Trait for rendering a strategy in a specific output format
pub trait OutputFormatter {
    fn format_strategy(&self, strategy: &Strategy) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown dashboard
pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
    include_metadata: bool,
}

/// Holds one formatter per output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Label for a profile score: Excellent, Good, Needs Work or Critical
pub fn score_label(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Excellent",
        60..=79 => "Good",
        40..=59 => "Needs Work",
        _ => "Critical",
    }
}

/// Score after completing the roadmap, capped at 100
pub fn projected_score(score: u8) -> u8 {
    score.saturating_add(PROJECTED_GAIN).min(100)
}

/// Mode-specific guidance shown after the roadmap
struct ModeFocus {
    heading: &'static str,
    summary: String,
    steps_title: &'static str,
    steps: Vec<String>,
}

fn mode_focus(strategy: &Strategy) -> ModeFocus {
    let themes = &strategy.gaps.advanced_tech_themes;

    match strategy.mode {
        Mode::GetHired => {
            let tech_stack = if themes.is_empty() {
                "your skills".to_string()
            } else {
                themes.iter().take(5).cloned().collect::<Vec<_>>().join(", ")
            };
            let first_theme = themes.first().map(String::as_str).unwrap_or("key skills");
            ModeFocus {
                heading: "Job Search Optimization",
                summary: format!("[Your Role] | {} | [Industry Impact]", tech_stack),
                steps_title: "Next Steps",
                steps: vec![
                    "Update headline with format above".to_string(),
                    format!("Add \"{}\" to skills section", first_theme),
                    "Enable \"Open to Work\" with recruiter-only visibility".to_string(),
                    "Apply to 5 jobs matching your profile this week".to_string(),
                ],
            }
        }
        Mode::GrowConnections => {
            let focus = if themes.is_empty() {
                "your expertise".to_string()
            } else {
                themes.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
            };
            ModeFocus {
                heading: "Network Expansion Strategy",
                steps_title: "Next 7 Days",
                steps: vec![
                    format!("Identify 10 thought leaders in {}", focus),
                    "Send 5 personalized connection requests".to_string(),
                    "Comment on 3 posts daily".to_string(),
                    "Join 2 relevant LinkedIn Groups".to_string(),
                ],
                summary: focus,
            }
        }
        Mode::InfluenceMarket => {
            let first_pillar = themes.first().map(String::as_str).unwrap_or("your expertise");
            ModeFocus {
                heading: "Thought Leadership Content Calendar",
                summary: content_pillars(strategy).join(", "),
                steps_title: "Next 7 Days",
                steps: vec![
                    "Draft Week 1 content (3 posts)".to_string(),
                    format!("Create {} carousel (10 slides)", first_pillar),
                    "Schedule posts for Mon/Wed/Fri".to_string(),
                    "Engage with 20 relevant posts in your niche".to_string(),
                ],
            }
        }
    }
}

fn content_pillars(strategy: &Strategy) -> Vec<String> {
    let themes = &strategy.gaps.advanced_tech_themes;
    if themes.is_empty() {
        vec!["your expertise".to_string()]
    } else {
        themes.iter().take(4).cloned().collect()
    }
}

fn joined_or_none(items: &[String], limit: usize) -> String {
    if items.is_empty() {
        "None detected".to_string()
    } else {
        items.iter().take(limit).cloned().collect::<Vec<_>>().join(", ")
    }
}

fn remaining_skills(strategy: &Strategy) -> usize {
    strategy
        .gaps
        .skills_missing_from_linkedin
        .len()
        .saturating_sub(MAX_LISTED_SKILLS)
}

fn analysis_date() -> String {
    chrono::Local::now().format("%B %d, %Y").to_string()
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>LinkedIn Strategy Dashboard - {{ mode }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f3f6f8;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #0a66c2;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-needs-work { background: #ffc107; color: #000; }
        .score-critical { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #0a66c2;
            border-bottom: 1px solid #e0e0e0;
            padding-bottom: 8px;
        }
        table { border-collapse: collapse; }
        th, td { border: 1px solid #e0e0e0; padding: 6px 12px; text-align: left; }
        .metadata { color: #666; font-size: 0.9em; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>LinkedIn Strategy Dashboard - {{ mode }}</h1>
            <h3>Profile Score: {{ score }}/100 <span class="score-badge {{ score_class }}">{{ score_label }}</span></h3>
        </div>

        <div class="section">
            <h2>Your Silent Wins (Resume vs LinkedIn Gaps)</h2>
            <p><strong>Missing Skills ({{ missing_skills_count }}):</strong> {{ missing_skills }}</p>
            {% if remaining_skills > 0 %}
            <p>...and {{ remaining_skills }} more</p>
            {% endif %}
            <p><strong>Missing Certifications ({{ missing_certifications_count }}):</strong> {{ missing_certifications }}</p>
            <p><strong>Missing Projects/Achievements ({{ missing_projects_count }}):</strong> {{ missing_projects }}</p>
            <p><strong>Advanced Tech Themes Detected ({{ themes_count }}):</strong> {{ themes }}</p>
        </div>

        <div class="section">
            <h2>Immediate Fixes</h2>
            <ol>
            {% for fix in immediate_fixes %}
                <li>{{ fix }}</li>
            {% endfor %}
            </ol>
        </div>

        <div class="section">
            <h2>Strategic Roadmap</h2>
            <ul>
            {% for step in strategic_roadmap %}
                <li>{{ step }}</li>
            {% endfor %}
            </ul>
            <p><strong>Projected Profile Score:</strong> {{ score }}/100 &rarr; {{ projected }}/100</p>
        </div>

        <div class="section">
            <h2>{{ focus_heading }}</h2>
            <p>{{ focus_summary }}</p>
            <h4>{{ focus_steps_title }}</h4>
            <ol>
            {% for step in focus_steps %}
                <li>{{ step }}</li>
            {% endfor %}
            </ol>
        </div>

        <div class="section">
            <h2>Gap Analysis Summary</h2>
            <table>
                <tr><th>Category</th><th>Missing on LinkedIn</th></tr>
                <tr><td>Skills</td><td>{{ missing_skills_count }}</td></tr>
                <tr><td>Certifications</td><td>{{ missing_certifications_count }}</td></tr>
                <tr><td>Projects</td><td>{{ missing_projects_count }}</td></tr>
                <tr><td>Tech Themes Detected</td><td>{{ themes_count }}</td></tr>
            </table>
        </div>

        {% if include_metadata %}
        <div class="metadata">
            <p>Analysis Date: {{ generated_at }} | LinkedIn Strategist v{{ version }}</p>
        </div>
        {% endif %}
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    include_metadata: bool,
    generated_at: String,
    version: String,
    mode: String,
    score: u8,
    projected: u8,
    score_class: String,
    score_label: String,
    missing_skills: String,
    missing_skills_count: usize,
    remaining_skills: usize,
    missing_certifications: String,
    missing_certifications_count: usize,
    missing_projects: String,
    missing_projects_count: usize,
    themes: String,
    themes_count: usize,
    immediate_fixes: Vec<String>,
    strategic_roadmap: Vec<String>,
    focus_heading: String,
    focus_summary: String,
    focus_steps_title: String,
    focus_steps: Vec<String>,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let label = score_label(score);
        let color = match label {
            "Excellent" => Color::Green,
            "Good" => Color::BrightGreen,
            "Needs Work" => Color::Yellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", label.to_uppercase().color(color).bold())
        } else {
            format!("[{}]", label.to_uppercase())
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_strategy(&self, strategy: &Strategy) -> Result<String> {
        let gaps = &strategy.gaps;
        let mut output = String::new();

        output.push_str(&self.format_header(
            &format!("📊 LINKEDIN STRATEGY - {}", strategy.mode.as_str().to_uppercase()),
            1,
        ));
        output.push_str(&format!(
            "Profile Score: {}/100 {}\n",
            strategy.profile_score,
            self.format_score_badge(strategy.profile_score)
        ));

        output.push_str(&self.format_header("Resume vs LinkedIn Gaps", 2));
        output.push_str(&format!(
            "📌 Missing Skills ({}): {}\n",
            gaps.skills_missing_from_linkedin.len(),
            joined_or_none(&gaps.skills_missing_from_linkedin, MAX_LISTED_SKILLS)
        ));
        let remaining = remaining_skills(strategy);
        if remaining > 0 {
            output.push_str(&format!("   ...and {} more\n", remaining));
        }
        output.push_str(&format!(
            "🏆 Missing Certifications ({}): {}\n",
            gaps.certifications_missing_from_linkedin.len(),
            joined_or_none(&gaps.certifications_missing_from_linkedin, usize::MAX)
        ));
        output.push_str(&format!(
            "💡 Missing Projects ({}): {}\n",
            gaps.projects_missing_from_linkedin.len(),
            joined_or_none(&gaps.projects_missing_from_linkedin, MAX_LISTED_PROJECTS)
        ));
        output.push_str(&format!(
            "⚡ Tech Themes ({}): {}\n",
            gaps.advanced_tech_themes.len(),
            self.colorize(&joined_or_none(&gaps.advanced_tech_themes, usize::MAX), Color::Cyan)
        ));

        output.push_str(&self.format_header("Immediate Fixes", 2));
        if strategy.immediate_fixes.is_empty() {
            output.push_str("No immediate fixes needed\n");
        }
        for (i, fix) in strategy.immediate_fixes.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, fix));
        }

        output.push_str(&self.format_header("Strategic Roadmap", 2));
        for step in &strategy.strategic_roadmap {
            output.push_str(&format!("  • {}\n", step));
        }

        output.push_str(&self.format_header("Projected Outcome", 3));
        output.push_str(&format!(
            "Profile Score: {}/100 → {}/100\n",
            strategy.profile_score,
            self.colorize(&projected_score(strategy.profile_score).to_string(), Color::Green)
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_strategy(&self, strategy: &Strategy) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(strategy)?)
        } else {
            Ok(serde_json::to_string(strategy)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score_label(score) {
            "Excellent" => "🟢",
            "Good" => "🟡",
            "Needs Work" => "🟠",
            _ => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_strategy(&self, strategy: &Strategy) -> Result<String> {
        let gaps = &strategy.gaps;
        let score = strategy.profile_score;
        let mode = strategy.mode;
        let mut output = String::new();

        output.push_str(&format!("# 📊 LinkedIn Strategy Dashboard - {}\n\n", mode));

        output.push_str("## Executive Summary\n\n");
        output.push_str(&format!(
            "**Profile Score:** {} **{}/100** ({})\n",
            Self::markdown_score_badge(score),
            score,
            score_label(score)
        ));
        output.push_str(&format!("**Strategic Mode:** {}\n", mode));
        if self.include_metadata {
            output.push_str(&format!("**Analysis Date:** {}\n", analysis_date()));
        }
        output.push_str("\n---\n\n");

        output.push_str("## 🎯 Profile Analysis\n\n");
        output.push_str("### Your Silent Wins (Resume vs LinkedIn Gaps)\n\n");
        output.push_str(&format!(
            "**📌 Missing Skills ({}):**\n{}\n",
            gaps.skills_missing_from_linkedin.len(),
            joined_or_none(&gaps.skills_missing_from_linkedin, MAX_LISTED_SKILLS)
        ));
        let remaining = remaining_skills(strategy);
        if remaining > 0 {
            output.push_str(&format!("...and {} more\n", remaining));
        }
        output.push_str(&format!(
            "\n**🏆 Missing Certifications ({}):**\n{}\n",
            gaps.certifications_missing_from_linkedin.len(),
            joined_or_none(&gaps.certifications_missing_from_linkedin, usize::MAX)
        ));
        output.push_str(&format!(
            "\n**💡 Missing Projects/Achievements ({}):**\n{}\n",
            gaps.projects_missing_from_linkedin.len(),
            joined_or_none(&gaps.projects_missing_from_linkedin, MAX_LISTED_PROJECTS)
        ));
        output.push_str(&format!(
            "\n**⚡ Advanced Tech Themes Detected ({}):**\n{}\n",
            gaps.advanced_tech_themes.len(),
            joined_or_none(&gaps.advanced_tech_themes, usize::MAX)
        ));
        output.push_str("\n---\n\n");

        output.push_str("## 🔧 Immediate Fixes (Top Priority)\n\n");
        for (i, fix) in strategy.immediate_fixes.iter().enumerate() {
            output.push_str(&format!("{}. **{}**\n", i + 1, fix));
        }
        output.push_str("\n---\n\n");

        output.push_str("## 🗓️ Strategic Roadmap\n\n");
        for step in &strategy.strategic_roadmap {
            output.push_str(&format!("- {}\n", step));
        }
        output.push_str("\n---\n\n");

        output.push_str("## 📈 Projected Outcomes\n\n");
        output.push_str(&format!(
            "- Profile Score: {}/100 → {}/100\n",
            score,
            projected_score(score)
        ));
        output.push_str("\n---\n\n");

        let focus = mode_focus(strategy);
        output.push_str(&format!("## 💼 Mode-Specific Strategy: {}\n\n", mode));
        output.push_str(&format!("### {}\n\n", focus.heading));
        match mode {
            Mode::GetHired => {
                output.push_str(&format!("**Recommended Headline Format:**\n*{}*\n\n", focus.summary));
            }
            Mode::GrowConnections => {
                output.push_str(&format!("**Focus Areas:** {}\n\n", focus.summary));
                output.push_str("**Daily Engagement Plan:**\n");
                output.push_str("- Morning (15 min): Comment on 3 posts from your feed\n");
                output.push_str("- Afternoon (10 min): Share 1 valuable article\n");
                output.push_str("- Evening (20 min): Send 2 personalized connection requests\n\n");
            }
            Mode::InfluenceMarket => {
                output.push_str("**Content Pillars:**\n");
                for (i, pillar) in content_pillars(strategy).iter().enumerate() {
                    output.push_str(&format!(
                        "{}. {} - How you apply it, challenges solved, lessons learned\n",
                        i + 1,
                        pillar
                    ));
                }
                output.push('\n');
            }
        }
        output.push_str(&format!("**{}:**\n", focus.steps_title));
        for (i, step) in focus.steps.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }
        output.push_str("\n---\n\n");

        output.push_str("## 📊 Gap Analysis Summary\n\n");
        output.push_str("| Category | Missing on LinkedIn |\n");
        output.push_str("|----------|---------------------|\n");
        output.push_str(&format!("| Skills | {} |\n", gaps.skills_missing_from_linkedin.len()));
        output.push_str(&format!(
            "| Certifications | {} |\n",
            gaps.certifications_missing_from_linkedin.len()
        ));
        output.push_str(&format!("| Projects | {} |\n", gaps.projects_missing_from_linkedin.len()));
        output.push_str(&format!(
            "| Tech Themes Detected | {} |\n",
            gaps.advanced_tech_themes.len()
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, include_metadata: bool) -> Self {
        Self {
            include_styles,
            include_metadata,
        }
    }

    fn create_template_data(&self, strategy: &Strategy) -> HtmlTemplate {
        let gaps = &strategy.gaps;
        let score = strategy.profile_score;
        let label = score_label(score);
        let score_class = match label {
            "Excellent" => "score-excellent",
            "Good" => "score-good",
            "Needs Work" => "score-needs-work",
            _ => "score-critical",
        };
        let focus = mode_focus(strategy);

        HtmlTemplate {
            include_styles: self.include_styles,
            include_metadata: self.include_metadata,
            generated_at: analysis_date(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            mode: strategy.mode.to_string(),
            score,
            projected: projected_score(score),
            score_class: score_class.to_string(),
            score_label: label.to_string(),
            missing_skills: joined_or_none(&gaps.skills_missing_from_linkedin, MAX_LISTED_SKILLS),
            missing_skills_count: gaps.skills_missing_from_linkedin.len(),
            remaining_skills: remaining_skills(strategy),
            missing_certifications: joined_or_none(&gaps.certifications_missing_from_linkedin, usize::MAX),
            missing_certifications_count: gaps.certifications_missing_from_linkedin.len(),
            missing_projects: joined_or_none(&gaps.projects_missing_from_linkedin, MAX_LISTED_PROJECTS),
            missing_projects_count: gaps.projects_missing_from_linkedin.len(),
            themes: joined_or_none(&gaps.advanced_tech_themes, usize::MAX),
            themes_count: gaps.advanced_tech_themes.len(),
            immediate_fixes: strategy.immediate_fixes.clone(),
            strategic_roadmap: strategy.strategic_roadmap.clone(),
            focus_heading: focus.heading.to_string(),
            focus_summary: focus.summary,
            focus_steps_title: focus.steps_title.to_string(),
            focus_steps: focus.steps,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_strategy(&self, strategy: &Strategy) -> Result<String> {
        self.create_template_data(strategy)
            .render()
            .map_err(|e| StrategistError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true, true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles, include_metadata),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, true, config.include_metadata, true)
    }

    pub fn generate_report(&self, strategy: &Strategy, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_strategy(strategy),
            OutputFormat::Json => self.json_formatter.format_strategy(strategy),
            OutputFormat::Markdown => self.markdown_formatter.format_strategy(strategy),
            OutputFormat::Html => self.html_formatter.format_strategy(strategy),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_strategy{}.{}", base_name, timestamp_suffix, extension)
}
