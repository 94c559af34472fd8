use serde::Serialize;
use serde_json::Value;

use crate::modules::job_normalization::domain::entities::{NormalizedJobRecord, RawJobFields};
use crate::modules::job_normalization::domain::services::QualityScorer;

/// What normalization changed for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizationStats {
    /// Keys that were missing or empty in the raw mapping and carry a value now
    pub fields_added: Vec<String>,
    /// Raw keys whose value differs in the normalized mapping
    pub fields_modified: Vec<String>,
    pub quality_improvement: f64,
    pub skills_extracted_count: usize,
    pub categories_extracted_count: usize,
}

impl NormalizationStats {
    /// Human-readable multi-line summary
    pub fn report(&self) -> String {
        let list = |fields: &[String]| {
            if fields.is_empty() {
                "none".to_string()
            } else {
                fields.join(", ")
            }
        };

        format!(
            "Normalization Report:\n\
             - Fields added: {}\n\
             - Fields modified: {}\n\
             - Quality improvement: {:+.2}\n\
             - Skills extracted: {}\n\
             - Categories extracted: {}",
            list(&self.fields_added),
            list(&self.fields_modified),
            self.quality_improvement,
            self.skills_extracted_count,
            self.categories_extracted_count
        )
    }
}

/// Null, empty strings, empty collections, `false` and zero count as empty
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

pub fn diff_stats(
    scorer: &QualityScorer,
    original: &RawJobFields,
    normalized: &NormalizedJobRecord,
) -> NormalizationStats {
    let raw_map = original.to_mapping();
    let normalized_map = normalized.to_mapping();

    // serde_json::Map iterates in key order, so both lists come out sorted
    let fields_added = normalized_map
        .iter()
        .filter(|(key, value)| {
            raw_map.get(*key).map_or(true, is_empty_value) && !is_empty_value(value)
        })
        .map(|(key, _)| key.clone())
        .collect();

    let fields_modified = raw_map
        .iter()
        .filter(|(key, value)| {
            normalized_map
                .get(*key)
                .is_some_and(|normalized_value| normalized_value != *value)
        })
        .map(|(key, _)| key.clone())
        .collect();

    NormalizationStats {
        fields_added,
        fields_modified,
        quality_improvement: normalized.quality_score - scorer.score(original),
        skills_extracted_count: normalized.skills.len(),
        categories_extracted_count: normalized.categories.len(),
    }
}
