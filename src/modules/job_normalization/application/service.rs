use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use futures::{stream, StreamExt};
use tokio_util::sync::CancellationToken;

use super::batch::BatchItem;
use super::clock::{Clock, SystemClock};
use super::concurrency_calculator::ConcurrencyCalculator;
use super::diagnostics::{diff_stats, NormalizationStats};
use crate::modules::job_normalization::domain::entities::{
    NormalizedJobRecord, RawDate, RawJobFields,
};
use crate::modules::job_normalization::domain::services::classifier::{
    employment_type, experience_level, extract_categories, extract_skills,
};
use crate::modules::job_normalization::domain::services::field_normalizers::{
    clean_text, normalize_company, normalize_date, normalize_location, normalize_title,
    resolve_remote_type,
};
use crate::modules::job_normalization::domain::services::salary_extractor::extract_salary;
use crate::modules::job_normalization::domain::services::section_extractor::{
    extract_benefits, extract_requirements,
};
use crate::modules::job_normalization::domain::services::{
    NormalizationConfig, PatternRegistry, QualityScorer,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_error, log_warn};

/// Slot counters for batch progress without lock contention
#[derive(Default)]
struct BatchCounts {
    normalized: AtomicUsize,
    failed: AtomicUsize,
    cancelled: AtomicUsize,
}

/// Turns raw scraped fields into normalized job records.
///
/// Cheap to clone: the registry, scorer and clock are shared behind `Arc`s and
/// never mutated, so clones can run on any thread.
#[derive(Clone)]
pub struct JobNormalizationService {
    registry: Arc<PatternRegistry>,
    scorer: Arc<QualityScorer>,
    clock: Arc<dyn Clock>,
}

impl JobNormalizationService {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock))
    }

    pub fn with_clock(registry: Arc<PatternRegistry>, clock: Arc<dyn Clock>) -> Self {
        let scorer = Arc::new(QualityScorer::new(registry.config()));
        Self {
            registry,
            scorer,
            clock,
        }
    }

    /// Build the registry from `config` and wrap it in a service
    pub fn from_config(config: &NormalizationConfig) -> AppResult<Self> {
        Ok(Self::new(Arc::new(PatternRegistry::build(config)?)))
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn scorer(&self) -> &QualityScorer {
        &self.scorer
    }

    /// Normalize one record. Pure apart from the clock read.
    pub fn normalize(&self, raw: &RawJobFields) -> AppResult<NormalizedJobRecord> {
        self.check_field_lengths(raw)?;
        LogContext::normalization(raw.title(), raw.company(), None);

        let registry = self.registry.as_ref();
        let config = registry.config();
        let raw_title = raw.title();
        let raw_description = raw.description();

        if raw_description.trim().is_empty() {
            LogContext::defaulted_field("description", raw_description, "empty");
        }

        let (location, location_type) = normalize_location(registry, raw.location());
        let remote_type = resolve_remote_type(registry, &location, location_type, raw_description);

        let salary = extract_salary(registry, raw_description);
        if !salary.is_well_ordered() {
            log_warn!(
                "Inverted salary range {:?} > {:?} for '{}', swapping bounds",
                salary.min,
                salary.max,
                raw_title
            );
        }
        let salary = salary.ordered();

        let posted_date = self.posted_date(raw.posted_date.as_ref());
        let expires_date = TimeDelta::try_days(config.expiry_days)
            .and_then(|window| posted_date.checked_add_signed(window));

        let mut record = NormalizedJobRecord {
            title: normalize_title(registry, raw_title),
            company: normalize_company(raw.company()),
            location,
            description: clean_text(registry, raw_description),
            source: raw.source.clone(),
            source_url: raw.source_url.clone(),
            external_id: raw.external_id.clone(),
            remote_type,
            experience_level: experience_level(registry, raw_title, raw_description),
            employment_type: employment_type(registry, raw_title, raw_description),
            salary_min: salary.min,
            salary_max: salary.max,
            salary_currency: salary.currency,
            salary_is_estimated: salary.is_estimated,
            skills: extract_skills(registry, raw_description),
            categories: extract_categories(registry, raw_title, raw_description),
            requirements: extract_requirements(registry, raw_description),
            benefits: extract_benefits(registry, raw_description),
            posted_date,
            expires_date,
            quality_score: 0.0,
        };

        // Scored last so every bonus sees the final field values
        record.quality_score = self.scorer.score(&record);

        LogContext::normalization(&record.title, &record.company, Some(record.quality_score));
        Ok(record)
    }

    /// Score the raw input with the same rules as normalized records
    pub fn score_raw(&self, raw: &RawJobFields) -> f64 {
        self.scorer.score(raw)
    }

    /// Compare a raw record with its normalized form
    pub fn diff_stats(
        &self,
        original: &RawJobFields,
        normalized: &NormalizedJobRecord,
    ) -> NormalizationStats {
        diff_stats(&self.scorer, original, normalized)
    }

    /// Normalize every record in parallel. The output has one slot per input,
    /// at the same index; a failing record never affects its siblings.
    pub async fn batch_normalize(&self, raws: Vec<RawJobFields>) -> Vec<BatchItem> {
        self.batch_normalize_with_cancellation(raws, CancellationToken::new())
            .await
    }

    /// Like `batch_normalize`, but records that have not started when `cancel`
    /// fires come back as `BatchItem::Cancelled`
    pub async fn batch_normalize_with_cancellation(
        &self,
        raws: Vec<RawJobFields>,
        cancel: CancellationToken,
    ) -> Vec<BatchItem> {
        let timer = TimedOperation::new("batch_normalize");
        let total = raws.len();
        let concurrency = ConcurrencyCalculator::calculate_worker_concurrency();
        let counts = Arc::new(BatchCounts::default());

        let items = stream::iter(raws.into_iter().enumerate().map(|(index, raw)| {
            let service = self.clone();
            let cancel = cancel.clone();
            let counts = counts.clone();

            async move {
                if cancel.is_cancelled() {
                    counts.cancelled.fetch_add(1, Ordering::Relaxed);
                    return BatchItem::Cancelled { raw };
                }

                let input = raw.clone();
                let outcome = tokio::task::spawn_blocking(move || service.normalize(&input))
                    .await
                    .map_err(|join_error| {
                        log_error!("Batch: worker for record #{} aborted: {}", index, join_error);
                        AppError::from(join_error)
                    })
                    .and_then(|result| result);

                match outcome {
                    Ok(record) => {
                        counts.normalized.fetch_add(1, Ordering::Relaxed);
                        BatchItem::Normalized(record)
                    }
                    Err(error) => {
                        LogContext::batch_item_failed(index, &error);
                        counts.failed.fetch_add(1, Ordering::Relaxed);
                        BatchItem::PassedThrough { raw, error }
                    }
                }
            }
        }))
        .buffered(concurrency)
        .collect::<Vec<_>>()
        .await;

        let normalized = counts.normalized.load(Ordering::Relaxed);
        let failed = counts.failed.load(Ordering::Relaxed);
        let cancelled = counts.cancelled.load(Ordering::Relaxed);

        LogContext::batch_progress(normalized, total, failed);
        if cancelled > 0 {
            log_debug!("Batch cancelled: {} records not started", cancelled);
        }
        timer.finish_with_info(&format!("{} records, {} workers", total, concurrency));

        items
    }

    fn posted_date(&self, raw: Option<&RawDate>) -> DateTime<Utc> {
        let explicit = match raw {
            Some(RawDate::Timestamp(timestamp)) => Some(*timestamp),
            Some(RawDate::Epoch(seconds)) => DateTime::from_timestamp(*seconds, 0),
            _ => None,
        };
        explicit.unwrap_or_else(|| normalize_date(raw, self.clock.now()))
    }

    fn check_field_lengths(&self, raw: &RawJobFields) -> AppResult<()> {
        let limit = self.registry.config().max_field_length;
        let posted_text = match &raw.posted_date {
            Some(RawDate::Text(text)) => Some(text.as_str()),
            _ => None,
        };

        let fields = [
            ("title", raw.title.as_deref()),
            ("company", raw.company.as_deref()),
            ("location", raw.location.as_deref()),
            ("description", raw.description.as_deref()),
            ("source", raw.source.as_deref()),
            ("source_url", raw.source_url.as_deref()),
            ("external_id", raw.external_id.as_deref()),
            ("posted_date", posted_text),
        ];

        for (name, value) in fields {
            let Some(value) = value else { continue };
            let length = value.chars().count();
            if length > limit {
                return Err(AppError::normalization(
                    "input",
                    format!("field '{}' has {} characters, limit is {}", name, length, limit),
                ));
            }
        }

        Ok(())
    }
}
