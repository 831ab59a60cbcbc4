//! Field classifiers turning raw questionnaire answers into tiers or
//! point contributions. All classifiers are total: malformed shapes fall
//! back to the "missing" equivalent and unknown literals to a default
//! tier, never an error.

use serde_json::Value;

/// Completeness tier for a single raw answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    Missing,
    Partial,
    Complete,
}

/// Strings shorter than this count as a partial answer.
const PARTIAL_TEXT_THRESHOLD: usize = 10;

pub fn classify_completeness(value: Option<&Value>) -> Completeness {
    match value {
        None | Some(Value::Null) => Completeness::Missing,
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Completeness::Missing
            } else if trimmed.chars().count() < PARTIAL_TEXT_THRESHOLD {
                Completeness::Partial
            } else {
                Completeness::Complete
            }
        }
        Some(Value::Array(items)) => {
            if items.is_empty() {
                Completeness::Missing
            } else {
                Completeness::Complete
            }
        }
        Some(Value::Object(fields)) => {
            if fields.is_empty() {
                Completeness::Missing
            } else {
                Completeness::Complete
            }
        }
        Some(Value::Bool(_)) | Some(Value::Number(_)) => Completeness::Complete,
    }
}

/// Presence-policy points: complete earns `full`, partial earns half
/// (floored), missing earns nothing.
pub fn presence_points(value: Option<&Value>, full: u32) -> u32 {
    match classify_completeness(value) {
        Completeness::Complete => full,
        Completeness::Partial => full / 2,
        Completeness::Missing => 0,
    }
}

/// Resolve an enumerated answer to a tier by case-insensitive substring
/// match against the label table. Unmatched or non-string values resolve
/// to `default`.
pub fn classify_enum<T: Copy>(value: Option<&Value>, table: &[(&str, T)], default: T) -> T {
    match normalized_text(value) {
        Some(needle) => table
            .iter()
            .find(|(label, _)| needle.contains(label))
            .map(|(_, tier)| *tier)
            .unwrap_or(default),
        None => default,
    }
}

/// Score an enumerated answer against a fixed point table. Absent answers
/// score zero; unmapped-but-present answers score `unmapped`, a documented
/// mid-tier, so unexpected-but-valid input is not punished.
pub fn enum_points(value: Option<&Value>, table: &[(&str, u32)], unmapped: u32) -> u32 {
    match normalized_text(value) {
        Some(needle) => table
            .iter()
            .find(|(label, _)| needle.contains(label))
            .map(|(_, points)| *points)
            .unwrap_or(unmapped),
        None => 0,
    }
}

/// Non-empty string entries of an array answer. A scalar where an array
/// was expected yields no entries.
pub fn selected_strings(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Multi-select points: zero when nothing is selected, otherwise
/// `base + increment * (count - 1)` clipped at `cap`.
pub fn classify_multi_select(value: Option<&Value>, base: u32, increment: u32, cap: u32) -> u32 {
    let count = selected_strings(value).len() as u32;
    if count == 0 {
        0
    } else {
        cap.min(base + increment * (count - 1))
    }
}

pub(crate) fn normalized_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(|raw| raw.trim().to_lowercase())
        .filter(|raw| !raw.is_empty())
}
