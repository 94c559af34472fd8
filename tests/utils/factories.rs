/// Test data factories using builder pattern
///
/// Provides convenient methods to create raw job records with sensible defaults
use chrono::{DateTime, Utc};
use job_normalizer_lib::{RawDate, RawJobFields};

#[derive(Debug, Clone, Default)]
pub struct RawJobFactory {
    fields: RawJobFields,
}

impl RawJobFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing set at all
    pub fn minimal() -> Self {
        Self::default()
    }

    /// A well-formed posting from a typical job board
    pub fn complete() -> Self {
        Self::new()
            .with_title("Sr. Rust Dev")
            .with_company("Ferrous Systems GmbH")
            .with_location("Berlin, Germany")
            .with_description(
                "We build embedded tooling in Rust and Python. \
                 Requirements: 5+ years of systems programming. \
                 Benefits: learning budget, remote Fridays. \
                 $120,000 - $150,000 per year.",
            )
            .with_source("greenhouse")
            .with_source_url("https://boards.example.com/jobs/1")
            .with_external_id("gh-1")
            .with_posted_text("2024-01-15")
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.fields.title = Some(title.to_string());
        self
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.fields.company = Some(company.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.fields.location = Some(location.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.fields.description = Some(description.to_string());
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.fields.source = Some(source.to_string());
        self
    }

    pub fn with_source_url(mut self, url: &str) -> Self {
        self.fields.source_url = Some(url.to_string());
        self
    }

    pub fn with_external_id(mut self, id: &str) -> Self {
        self.fields.external_id = Some(id.to_string());
        self
    }

    pub fn with_posted_text(mut self, date: &str) -> Self {
        self.fields.posted_date = Some(RawDate::Text(date.to_string()));
        self
    }

    pub fn with_posted_at(mut self, instant: DateTime<Utc>) -> Self {
        self.fields.posted_date = Some(RawDate::Timestamp(instant));
        self
    }

    pub fn build(self) -> RawJobFields {
        self.fields
    }
}
