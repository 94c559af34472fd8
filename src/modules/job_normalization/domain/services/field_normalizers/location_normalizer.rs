use super::text_cleaner::collapse_whitespace;
use crate::modules::job_normalization::domain::services::pattern_registry::PatternRegistry;
use crate::modules::job_normalization::domain::value_objects::RemoteType;

/// Normalize a location string and classify the work arrangement.
///
/// Remote vocabulary wins over hybrid vocabulary. For hybrid postings the
/// hybrid tokens are stripped so the base location survives.
pub fn normalize_location(registry: &PatternRegistry, raw: &str) -> (String, RemoteType) {
    let location = collapse_whitespace(raw);
    if location.is_empty() {
        return (String::new(), RemoteType::OnSite);
    }

    if registry.remote().is_match(&location) {
        return ("Remote".to_string(), RemoteType::Remote);
    }

    if let Some(hybrid) = registry.hybrid() {
        if hybrid.is_match(&location) {
            let stripped = collapse_whitespace(&hybrid.replace_all(&location, ""));
            if stripped.is_empty() {
                return ("Hybrid".to_string(), RemoteType::Hybrid);
            }
            return (stripped, RemoteType::Hybrid);
        }
    }

    (location, RemoteType::OnSite)
}

/// Classify free text with the location vocabulary, remote first
pub fn detect_remote_type(registry: &PatternRegistry, text: &str) -> RemoteType {
    if registry.remote().is_match(text) {
        RemoteType::Remote
    } else if registry.hybrid().is_some_and(|h| h.is_match(text)) {
        RemoteType::Hybrid
    } else {
        RemoteType::OnSite
    }
}

/// A non-empty location always decides. The description is only consulted,
/// with the same vocabulary, when no location was given at all.
pub fn resolve_remote_type(
    registry: &PatternRegistry,
    location: &str,
    from_location: RemoteType,
    description: &str,
) -> RemoteType {
    if !location.is_empty() || description.is_empty() {
        return from_location;
    }
    detect_remote_type(registry, description)
}
