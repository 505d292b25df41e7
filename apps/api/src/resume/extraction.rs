//! Typed resume record and the coercion from the LLM's untyped JSON document.
//!
//! The LLM is asked for a fixed shape but routinely deviates from it: numbers
//! where strings were asked for, a single string instead of a list, skills grouped
//! by category, or a JSON document wrapped in a string. Coercion never fails on
//! shape; fields it cannot read default to empty. Only a reply that is not a JSON
//! object at all becomes `ExtractionOutcome::Unparseable`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::llm_client::strip_json_fences;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeExtraction {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
}

/// Result of turning an LLM reply into a `ResumeExtraction`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// `document` is the JSON as the model returned it, for display.
    Parsed {
        record: ResumeExtraction,
        document: Value,
    },
    Unparseable {
        raw: String,
        reason: String,
    },
}

/// Parses LLM output text as JSON, tolerating markdown code fences.
pub fn parse_llm_document(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(strip_json_fences(text))
}

/// Coerces an untyped document into a typed record.
pub fn coerce_extraction(document: Value) -> ExtractionOutcome {
    match document {
        Value::Object(map) => ExtractionOutcome::Parsed {
            record: record_from_map(&map),
            document: Value::Object(map),
        },
        // JSON smuggled inside a JSON string: unwrap one level.
        Value::String(text) => match parse_llm_document(&text) {
            Ok(Value::Object(map)) => ExtractionOutcome::Parsed {
                record: record_from_map(&map),
                document: Value::Object(map),
            },
            Ok(other) => ExtractionOutcome::Unparseable {
                reason: format!("expected a JSON object, got {}", kind(&other)),
                raw: text,
            },
            Err(e) => ExtractionOutcome::Unparseable {
                reason: e.to_string(),
                raw: text,
            },
        },
        other => ExtractionOutcome::Unparseable {
            reason: format!("expected a JSON object, got {}", kind(&other)),
            raw: other.to_string(),
        },
    }
}

fn record_from_map(map: &Map<String, Value>) -> ResumeExtraction {
    ResumeExtraction {
        personal_info: map
            .get("personal_info")
            .map(personal_info)
            .unwrap_or_default(),
        education: objects(map.get("education"))
            .map(|e| Education {
                institution: text_field(e, "institution"),
                degree: text_field(e, "degree"),
                year: text_field(e, "year"),
            })
            .collect(),
        experience: objects(map.get("experience"))
            .map(|e| Experience {
                company: text_field(e, "company"),
                position: text_field(e, "position"),
                duration: text_field(e, "duration"),
                responsibilities: e
                    .get("responsibilities")
                    .map(text_list)
                    .unwrap_or_default(),
            })
            .collect(),
        skills: map.get("skills").map(skill_list).unwrap_or_default(),
        certifications: map.get("certifications").map(text_list).unwrap_or_default(),
        languages: map.get("languages").map(text_list).unwrap_or_default(),
    }
}

fn personal_info(value: &Value) -> PersonalInfo {
    match value.as_object() {
        Some(info) => PersonalInfo {
            name: text_field(info, "name"),
            email: text_field(info, "email"),
            phone: text_field(info, "phone"),
            location: text_field(info, "location"),
        },
        None => PersonalInfo::default(),
    }
}

fn objects(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(scalar_text)
}

/// Strings (trimmed, non-blank) and numbers. Years often arrive as numbers.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A list of scalars; objects contribute their `name`. A lone string is a one-item list.
fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => text_field(obj, "name"),
                other => scalar_text(other),
            })
            .collect(),
        Value::String(_) => scalar_text(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Skills must be list-valued. The one tolerated deviation is a map of
/// category → list ("technical": [...], "soft": [...]), flattened by category name.
///
/// Entries are trimmed and blank ones dropped: an empty candidate skill is a
/// substring of every required skill and would report all of them as found.
fn skill_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(_) => text_list(value),
        Value::Object(groups) => groups
            .values()
            .filter(|group| group.is_array())
            .flat_map(text_list)
            .collect(),
        _ => Vec::new(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
