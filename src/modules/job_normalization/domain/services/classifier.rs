use std::collections::BTreeSet;

use regex::Regex;

use super::field_normalizers::collapse_whitespace;
use crate::modules::job_normalization::domain::services::pattern_registry::PatternRegistry;
use crate::modules::job_normalization::domain::value_objects::{EmploymentType, ExperienceLevel};

/// Vocabulary that signals an experience level
pub fn experience_pattern(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Entry => {
            r"\b(?:entry|junior|jr\.?|grad|graduate|new|fresh|0-2\s*years?)\b"
        }
        ExperienceLevel::Mid => r"\b(?:mid|middle|intermediate|2-5\s*years?|3-5\s*years?)\b",
        ExperienceLevel::Senior => {
            r"\b(?:senior|sr\.?|lead|principal|5\+\s*years?|5-10\s*years?)\b"
        }
        ExperienceLevel::Executive => {
            r"\b(?:executive|director|vp|vice\s*president|c-level|10\+\s*years?)\b"
        }
    }
}

/// Vocabulary that signals an employment type
pub fn employment_pattern(kind: EmploymentType) -> &'static str {
    match kind {
        EmploymentType::FullTime => r"\b(?:full.?time|permanent|salaried)\b",
        EmploymentType::PartTime => r"\b(?:part.?time|hourly)\b",
        EmploymentType::Contract => {
            r"\b(?:contract|contractor|freelance|consulting|temp|temporary)\b"
        }
        EmploymentType::Internship => r"\b(?:intern|internship|co-op|coop)\b",
    }
}

/// First table entry whose pattern matches wins
fn first_match<T: Copy>(table: &[(T, Regex)], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(label, _)| *label)
}

fn combined(title: &str, description: &str) -> String {
    format!("{} {}", title, description).to_lowercase()
}

pub fn experience_level(
    registry: &PatternRegistry,
    title: &str,
    description: &str,
) -> ExperienceLevel {
    first_match(registry.experience_table(), &combined(title, description)).unwrap_or_default()
}

pub fn employment_type(
    registry: &PatternRegistry,
    title: &str,
    description: &str,
) -> EmploymentType {
    first_match(registry.employment_table(), &combined(title, description)).unwrap_or_default()
}

/// Lexicon skills mentioned in the description, lowercase and deduplicated
pub fn extract_skills(registry: &PatternRegistry, description: &str) -> BTreeSet<String> {
    if description.is_empty() {
        return BTreeSet::new();
    }

    registry
        .skills()
        .find_iter(description)
        .map(|m| collapse_whitespace(&m.as_str().to_lowercase()))
        .collect()
}

/// Labels of every category group with a whole-word hit, in group order
pub fn extract_categories(
    registry: &PatternRegistry,
    title: &str,
    description: &str,
) -> Vec<String> {
    let text = combined(title, description);

    registry
        .categories()
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&text))
        .map(|(label, _)| label.clone())
        .collect()
}
