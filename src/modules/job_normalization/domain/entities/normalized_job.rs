use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::modules::job_normalization::domain::traits::QualitySubject;
use crate::modules::job_normalization::domain::value_objects::{
    EmploymentType, ExperienceLevel, RemoteType,
};

/// Fully typed, enriched job record.
///
/// Built fresh by the normalization service and never mutated afterwards.
/// Every field is always present in the serialized mapping; absent values
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedJobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub external_id: Option<String>,

    pub remote_type: RemoteType,
    pub experience_level: ExperienceLevel,
    pub employment_type: EmploymentType,

    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    pub salary_is_estimated: bool,

    /// Lowercase skill keywords found in the description, sorted ascending
    pub skills: BTreeSet<String>,
    /// Category labels in detection order
    pub categories: Vec<String>,
    pub requirements: String,
    pub benefits: String,

    pub posted_date: DateTime<Utc>,
    pub expires_date: Option<DateTime<Utc>>,

    /// Heuristic completeness score in [0.0, 1.0]
    pub quality_score: f64,
}

impl NormalizedJobRecord {
    pub fn to_mapping(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }

    pub fn has_salary(&self) -> bool {
        self.salary_min.is_some() || self.salary_max.is_some()
    }
}

impl QualitySubject for NormalizedJobRecord {
    fn title_text(&self) -> &str {
        &self.title
    }

    fn company_text(&self) -> &str {
        &self.company
    }

    fn description_text(&self) -> &str {
        &self.description
    }

    fn location_text(&self) -> &str {
        &self.location
    }

    fn has_salary(&self) -> bool {
        NormalizedJobRecord::has_salary(self)
    }

    fn skill_count(&self) -> usize {
        self.skills.len()
    }

    fn required_field(&self, name: &str) -> &str {
        match name {
            "title" => &self.title,
            "company" => &self.company,
            "location" => &self.location,
            "description" => &self.description,
            "source" => self.source.as_deref().unwrap_or(""),
            "source_url" => self.source_url.as_deref().unwrap_or(""),
            "external_id" => self.external_id.as_deref().unwrap_or(""),
            _ => "",
        }
    }
}
