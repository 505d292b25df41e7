//! Text normalizer — turns noisy scraped or extracted text into a single-spaced
//! string with scraper artifacts removed.
//!
//! Three passes, always in this order:
//! 1. whitespace collapse (runs of Unicode whitespace → one space, trimmed)
//! 2. known section-label dedup ("ExperienceExperience" → "Experience")
//! 3. adjacent-token dedup ("the the cat" → "the cat")
//!
//! Token dedup can join two copies of a multi-word label ("Open to to workOpen
//! to work"), so passes 2 and 3 repeat until the text is stable. `normalize` is
//! total and idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// Section headings that profile pages are known to render twice with no separator.
pub const SECTION_LABELS: &[&str] = &[
    "Highlights",
    "Experience",
    "Education",
    "Skills",
    "About",
    "Activity",
    "Interests",
    "Licenses",
    "Certifications",
    "Open to work",
    "People you may know",
    "You might like",
    "More profiles for you",
    "Explore Premium profiles",
    "Licenses & certifications",
];

/// One pattern per label: the first occurrence (captured) followed by one or more repeats.
static LABEL_REPEATS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SECTION_LABELS
        .iter()
        .map(|label| {
            let escaped = regex::escape(label);
            Regex::new(&format!("(?i)({escaped})(?:{escaped})+"))
                .expect("section label pattern should compile")
        })
        .collect()
});

/// Normalizes raw text for display and downstream matching.
pub fn normalize(text: &str) -> String {
    let mut current = collapse_whitespace(text);
    loop {
        let labels = collapse_repeated_labels(&current);
        let next = dedup_adjacent_tokens(&labels);
        // every change shortens the text
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Replaces every whitespace run with a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapses immediately repeated section labels, keeping the casing of the first copy.
///
/// Labels overlap ("Licenses" / "Licenses & certifications"), so one collapse can
/// expose another; the passes repeat until nothing changes. Each replacement
/// strictly shortens the text, so the loop terminates.
pub fn collapse_repeated_labels(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let mut next = current.clone();
        for pattern in LABEL_REPEATS.iter() {
            next = pattern.replace_all(&next, "$1").into_owned();
        }
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Drops tokens identical (case-sensitive) to the token right before them.
pub fn dedup_adjacent_tokens(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for token in text.split_whitespace() {
        if kept.last() != Some(&token) {
            kept.push(token);
        }
    }
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("a\n\n  b\tc"), "a b c");
        assert_eq!(normalize("   padded   "), "padded");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_doubled_label_collapses() {
        assert_eq!(
            normalize("HighlightsHighlights and more"),
            "Highlights and more"
        );
        assert_eq!(normalize("ExperienceExperienceExperience"), "Experience");
    }

    #[test]
    fn test_label_match_is_case_insensitive_and_keeps_first_casing() {
        assert_eq!(normalize("experienceEXPERIENCE at Acme"), "experience at Acme");
        assert_eq!(normalize("ABOUTabout me"), "ABOUT me");
    }

    #[test]
    fn test_multi_word_labels_collapse() {
        assert_eq!(
            normalize("Open to workOpen to work recruiters"),
            "Open to work recruiters"
        );
        assert_eq!(
            normalize("Licenses & certificationsLicenses & certifications AWS"),
            "Licenses & certifications AWS"
        );
    }

    #[test]
    fn test_label_inside_word_still_collapses() {
        // no word boundary: the repeat itself is the artifact
        assert_eq!(normalize("MySkillsSkills"), "MySkills");
    }

    #[test]
    fn test_labels_with_separator_are_left_to_token_pass() {
        assert_eq!(normalize("Skills Skills Rust"), "Skills Rust");
        assert_eq!(normalize("Skills, Skills"), "Skills, Skills");
    }

    #[test]
    fn test_adjacent_token_dedup() {
        assert_eq!(normalize("the the cat cat cat sat"), "the cat sat");
    }

    #[test]
    fn test_token_dedup_is_case_sensitive() {
        assert_eq!(normalize("Rust rust RUST"), "Rust rust RUST");
    }

    #[test]
    fn test_non_adjacent_repeats_survive() {
        assert_eq!(normalize("a b a b"), "a b a b");
    }

    #[test]
    fn test_label_collapse_feeds_token_dedup() {
        assert_eq!(normalize("SkillsSkills Skills"), "Skills");
    }

    #[test]
    fn test_unicode_text_passes_through() {
        assert_eq!(normalize("Café\u{00A0}\u{00A0}Zürich  Zürich"), "Café Zürich");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "a\n\n  b\tc",
            "HighlightsHighlights and more",
            "the the cat cat cat sat",
            "SkillsSkills Skills",
            "Licenses & certificationsLicenses & certificationsCertifications",
            "LicensesLicenses & certificationsLicenses & certifications",
            "ABOUTabout about About",
            "Open to work Open to workOpen to work work",
            "  Experience\nExperience  ExperienceExperience  ",
            "Open to to workOpen to work",
            "People you may may knowPeople you may know",
            "More profiles for for youMore profiles for you tail",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_token_dedup_exposing_label_repeat_is_collapsed() {
        assert_eq!(normalize("Open to to workOpen to work"), "Open to work");
        assert_eq!(
            normalize("You might might likeYou might like"),
            "You might like"
        );
    }

    #[test]
    fn test_no_label_immediately_repeated_after_normalize() {
        let samples = [
            "Open to to workOpen to work",
            "People you may may knowPeople you may know",
            "Explore Premium Premium profilesExplore Premium profiles more",
            "LicensesLicenses & certificationsLicenses & certifications",
        ];
        for sample in samples {
            let out = normalize(sample).to_lowercase();
            for label in SECTION_LABELS {
                let doubled = label.to_lowercase().repeat(2);
                assert!(!out.contains(&doubled), "{label:?} repeated in {out:?}");
            }
        }
    }

    #[test]
    fn test_no_adjacent_duplicates_after_normalize() {
        let out = normalize("x x y EducationEducation Education z z");
        let tokens: Vec<&str> = out.split(' ').collect();
        assert!(tokens.windows(2).all(|w| w[0] != w[1]));
        assert_eq!(out, "x y Education z");
    }
}
