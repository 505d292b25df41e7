//! Skill matcher — checks a required-skills list against skills extracted from a
//! candidate's resume.
//!
//! Matching rule: a required skill is found when, after lower-casing both sides,
//! it is a substring of some candidate skill or some candidate skill is a
//! substring of it. The rule is deliberately loose in both directions so that
//! "Python" matches "Python3" and "Advanced Python Programming" matches "python".
//! It also means "Java" matches "JavaScript"; that imprecision is part of the
//! contract and callers rely on it.

use serde::{Deserialize, Serialize};

/// Outcome of one match call. Never cached or mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Required skills with no matching candidate, in input order and casing.
    pub missing: Vec<String>,
    /// Share of required skills found, 0.0 – 100.0. Unrounded.
    pub percentage: f64,
}

impl MatchResult {
    /// Percentage rounded to one decimal place, for display only.
    pub fn rounded_percentage(&self) -> f64 {
        (self.percentage * 10.0).round() / 10.0
    }

    /// Display form, e.g. "66.7%".
    pub fn display_percentage(&self) -> String {
        format!("{:.1}%", self.percentage)
    }

    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Matches `required` against `candidate`.
///
/// Duplicates in `required` are counted individually: an unmet skill listed
/// twice shows up twice in `missing`. An empty `required` list is vacuously
/// fully matched (100%).
pub fn match_skills<R, C>(required: &[R], candidate: &[C]) -> MatchResult
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    if required.is_empty() {
        return MatchResult {
            missing: Vec::new(),
            percentage: 100.0,
        };
    }

    let candidate_lower: Vec<String> = candidate
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .map(|skill| skill.as_ref())
        .filter(|skill| !is_covered(&skill.to_lowercase(), &candidate_lower))
        .map(String::from)
        .collect();

    let found = required.len() - missing.len();
    MatchResult {
        missing,
        percentage: 100.0 * found as f64 / required.len() as f64,
    }
}

fn is_covered(required_lower: &str, candidate_lower: &[String]) -> bool {
    candidate_lower
        .iter()
        .any(|c| c.contains(required_lower) || required_lower.contains(c.as_str()))
}
