use regex::Regex;

use super::field_normalizers::clean_text;
use crate::modules::job_normalization::domain::services::pattern_registry::PatternRegistry;

/// Headers introducing a requirements section, tried in order. The capture
/// runs over the following sentences.
pub const REQUIREMENT_SECTION_PATTERNS: [&str; 3] = [
    r"(?:requirements?|qualifications?|skills?)[:\s]*([^.]*(?:\.[^.]*){0,10})",
    r"(?:must have|required)[:\s]*([^.]*(?:\.[^.]*){0,5})",
    r"(?:you should have|we're looking for)[:\s]*([^.]*(?:\.[^.]*){0,5})",
];

/// Headers introducing a benefits section, tried in order
pub const BENEFIT_SECTION_PATTERNS: [&str; 2] = [
    r"(?:benefits?|perks?|we offer)[:\s]*([^.]*(?:\.[^.]*){0,10})",
    r"(?:compensation|package includes)[:\s]*([^.]*(?:\.[^.]*){0,5})",
];

fn first_section(registry: &PatternRegistry, patterns: &[Regex], description: &str) -> String {
    if description.is_empty() {
        return String::new();
    }

    patterns
        .iter()
        .find_map(|pattern| pattern.captures(description))
        .and_then(|captures| captures.get(1))
        .map(|section| clean_text(registry, section.as_str()))
        .unwrap_or_default()
}

/// Cleaned requirements section of the raw description, empty when absent
pub fn extract_requirements(registry: &PatternRegistry, description: &str) -> String {
    first_section(registry, registry.requirement_sections(), description)
}

/// Cleaned benefits section of the raw description, empty when absent
pub fn extract_benefits(registry: &PatternRegistry, description: &str) -> String {
    first_section(registry, registry.benefit_sections(), description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::job_normalization::domain::services::pattern_registry::NormalizationConfig;

    fn registry() -> PatternRegistry {
        PatternRegistry::build(&NormalizationConfig::default()).unwrap()
    }

    #[test]
    fn extracts_requirements_after_header() {
        let registry = registry();
        let description = "About us: we ship. <b>Requirements:</b> 3 years of Rust. Tokio experience";
        assert_eq!(
            extract_requirements(&registry, description),
            "3 years of Rust. Tokio experience"
        );
    }

    #[test]
    fn falls_back_to_later_headers() {
        let registry = registry();
        assert_eq!(
            extract_requirements(&registry, "You must have: a driving licence"),
            "a driving licence"
        );
    }

    #[test]
    fn extracts_benefits() {
        let registry = registry();
        assert_eq!(
            extract_benefits(&registry, "Great team. Perks: remote work, 401k"),
            "remote work, 401k"
        );
    }

    #[test]
    fn missing_sections_are_empty() {
        let registry = registry();
        assert_eq!(extract_requirements(&registry, "Just a job."), "");
        assert_eq!(extract_benefits(&registry, ""), "");
    }
}
