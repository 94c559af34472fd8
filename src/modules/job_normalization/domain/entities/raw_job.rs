use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::modules::job_normalization::domain::traits::QualitySubject;
use crate::shared::errors::AppResult;

/// Raw posting date as handed over by a fetch collaborator.
///
/// Variants are tried in order; `Other` keeps anything unrecognized so a bad
/// date never rejects the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Timestamp(DateTime<Utc>),
    /// Seconds since the Unix epoch
    Epoch(i64),
    Text(String),
    Other(Value),
}

/// Accept any JSON value for a text field. Numbers and booleans keep their
/// textual form; arrays and objects are dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Unnormalized job fields scraped from a source.
///
/// Every field is optional; missing and empty are both tolerated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJobFields {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub source_url: Option<String>,
    /// Job-board specific identifier
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<RawDate>,
}

impl RawJobFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mapping(value: serde_json::Value) -> AppResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The mapping exactly as received, without keys that were never set
    pub fn to_mapping(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or("")
    }
}

impl QualitySubject for RawJobFields {
    fn title_text(&self) -> &str {
        self.title()
    }

    fn company_text(&self) -> &str {
        self.company()
    }

    fn description_text(&self) -> &str {
        self.description()
    }

    fn location_text(&self) -> &str {
        self.location()
    }

    fn has_salary(&self) -> bool {
        false
    }

    fn skill_count(&self) -> usize {
        0
    }

    fn required_field(&self, name: &str) -> &str {
        match name {
            "title" => self.title(),
            "company" => self.company(),
            "location" => self.location(),
            "description" => self.description(),
            "source" => self.source.as_deref().unwrap_or(""),
            "source_url" => self.source_url(),
            "external_id" => self.external_id.as_deref().unwrap_or(""),
            _ => "",
        }
    }
}
