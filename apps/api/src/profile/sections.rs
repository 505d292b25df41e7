//! Profile sections — turning scraper output or pasted page content into
//! normalized, uniquely-titled sections.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::text::html::html_to_text;
use crate::text::normalize::{normalize, SECTION_LABELS};

/// Headings looked for in pasted content.
pub const PASTE_SECTION_LABELS: &[&str] = &[
    "Highlights",
    "Experience",
    "Education",
    "Skills",
    "About",
    "Activity",
    "Interests",
    "Licenses & certifications",
];

/// Case-insensitive literal matcher for each entry of `PASTE_SECTION_LABELS`, same order.
static PASTE_LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PASTE_SECTION_LABELS
        .iter()
        .map(|label| {
            RegexBuilder::new(&regex::escape(label))
                .case_insensitive(true)
                .build()
                .expect("paste label pattern should compile")
        })
        .collect()
});

/// Title used when pasted content contains none of the known headings.
pub const FALLBACK_SECTION_TITLE: &str = "Profile";

/// One section as the scraper recovered it from the rendered page.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    pub title: Option<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    pub title: String,
    pub content: String,
}

/// Repairs a heading rendered twice ("ExperienceExperience"), returning the
/// label's canonical casing. Anything else is returned as given.
pub fn clean_section_title(raw: &str) -> String {
    let trimmed = raw.trim();
    SECTION_LABELS
        .iter()
        .find(|label| is_doubled(trimmed, label))
        .map(|label| label.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn is_doubled(title: &str, label: &str) -> bool {
    let lower = title.to_lowercase();
    let label = label.to_lowercase();
    lower.len() == label.len() * 2 && lower.starts_with(&label) && lower.ends_with(&label)
}

/// Builds sections from scraper output, in order.
///
/// Missing or blank titles become "Section {n}" (1-based position). A title that
/// is already taken gets " 1", " 2", ... appended until it is unique.
pub fn build_sections(raw: Vec<RawSection>) -> Vec<ProfileSection> {
    let mut taken: HashSet<String> = HashSet::new();
    raw.into_iter()
        .enumerate()
        .map(|(i, section)| {
            let base = section
                .title
                .as_deref()
                .map(clean_section_title)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Section {}", i + 1));
            let title = unique_title(&base, &taken);
            taken.insert(title.clone());
            ProfileSection {
                title,
                content: normalize(&section.raw_text),
            }
        })
        .collect()
}

fn unique_title(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{base} {n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Builds sections from content pasted by the user when scraping is not possible.
///
/// The content may be HTML or plain text. Every known heading present
/// (case-insensitive, doubled or not) yields a section titled with that heading;
/// pasted content has no reliable section boundaries, so each of them carries the
/// whole normalized text. With no known heading, one "Profile" section is returned.
pub fn sections_from_pasted(content: &str) -> Vec<ProfileSection> {
    let text = normalize(&html_to_text(content));

    let mut sections: Vec<ProfileSection> = PASTE_SECTION_LABELS
        .iter()
        .zip(PASTE_LABEL_PATTERNS.iter())
        .filter(|(_, pattern)| pattern.is_match(&text))
        .map(|(label, _)| ProfileSection {
            title: label.to_string(),
            content: text.clone(),
        })
        .collect();

    if sections.is_empty() {
        sections.push(ProfileSection {
            title: FALLBACK_SECTION_TITLE.to_string(),
            content: text,
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: Option<&str>, text: &str) -> RawSection {
        RawSection {
            title: title.map(String::from),
            raw_text: text.to_string(),
        }
    }

    #[test]
    fn test_clean_doubled_title() {
        assert_eq!(clean_section_title("ExperienceExperience"), "Experience");
        assert_eq!(clean_section_title("aboutABOUT"), "About");
        assert_eq!(
            clean_section_title("Licenses & certificationsLicenses & certifications"),
            "Licenses & certifications"
        );
    }

    #[test]
    fn test_clean_title_leaves_others_alone() {
        assert_eq!(clean_section_title("Experience"), "Experience");
        assert_eq!(clean_section_title("  Volunteering "), "Volunteering");
        assert_eq!(clean_section_title("ExperienceExperienceExperience"), "ExperienceExperienceExperience");
    }

    #[test]
    fn test_build_sections_normalizes_content() {
        let sections = build_sections(vec![raw(
            Some("AboutAbout"),
            "AboutAbout\n\n  Rust   engineer engineer",
        )]);
        assert_eq!(
            sections,
            vec![ProfileSection {
                title: "About".into(),
                content: "About Rust engineer".into(),
            }]
        );
    }

    #[test]
    fn test_missing_titles_are_numbered_by_position() {
        let sections = build_sections(vec![
            raw(Some("About"), "a"),
            raw(None, "b"),
            raw(Some("   "), "c"),
        ]);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["About", "Section 2", "Section 3"]);
    }

    #[test]
    fn test_duplicate_titles_get_suffixes() {
        let sections = build_sections(vec![
            raw(Some("Activity"), "a"),
            raw(Some("ActivityActivity"), "b"),
            raw(Some("Activity"), "c"),
            raw(Some("Activity 1"), "d"),
        ]);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Activity", "Activity 1", "Activity 2", "Activity 1 1"]);
    }

    #[test]
    fn test_pasted_content_with_known_headings() {
        let html = "<h2>ExperienceExperience</h2><p>Acme</p><h2>Skills</h2><p>Rust</p>";
        let sections = sections_from_pasted(html);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Experience", "Skills"]);
        assert!(sections
            .iter()
            .all(|s| s.content == "Experience Acme Skills Rust"));
    }

    #[test]
    fn test_pasted_heading_match_ignores_case() {
        let sections = sections_from_pasted("<p>licenses &amp; CERTIFICATIONS</p><p>AWS</p>");
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Licenses & certifications"]);
        assert_eq!(PASTE_LABEL_PATTERNS.len(), PASTE_SECTION_LABELS.len());
    }

    #[test]
    fn test_pasted_content_without_headings() {
        let sections = sections_from_pasted("Jane Doe\nStaff engineer at Acme");
        assert_eq!(
            sections,
            vec![ProfileSection {
                title: "Profile".into(),
                content: "Jane Doe Staff engineer at Acme".into(),
            }]
        );
    }
}
