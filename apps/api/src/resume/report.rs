//! Skills report: required skills from the client checked against the skills the
//! LLM extracted from the resume.

use serde::Serialize;

use crate::resume::extraction::{ExtractionOutcome, ResumeExtraction};
use crate::skills::matcher::match_skills;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsReport {
    pub percentage: f64,
    pub display_percentage: String,
    pub missing: Vec<String>,
    pub missing_count: usize,
    pub candidate_skills: Vec<String>,
    pub all_found: bool,
}

/// Either a report, or the reason the skills could not be analysed. A malformed
/// LLM reply lands here as `Failed`, never as an error status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SkillsAnalysis {
    Matched(SkillsReport),
    Failed { message: String },
}

/// One required skill per line; surrounding whitespace and blank lines are dropped.
pub fn parse_required_skills(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn skills_report(required: &[String], record: &ResumeExtraction) -> SkillsReport {
    let result = match_skills(required, &record.skills);
    SkillsReport {
        percentage: result.percentage,
        display_percentage: result.display_percentage(),
        missing_count: result.missing.len(),
        all_found: result.all_found(),
        missing: result.missing,
        candidate_skills: record.skills.clone(),
    }
}

pub fn analyze_skills(required: &[String], outcome: &ExtractionOutcome) -> SkillsAnalysis {
    match outcome {
        ExtractionOutcome::Parsed { record, .. } => {
            SkillsAnalysis::Matched(skills_report(required, record))
        }
        ExtractionOutcome::Unparseable { reason, .. } => SkillsAnalysis::Failed {
            message: format!("Could not analyze skills - Error: {reason}"),
        },
    }
}
