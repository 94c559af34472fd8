use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use job_normalizer_lib::{
    FixedClock, JobNormalizationService, NormalizationConfig, PatternRegistry,
};

/// The instant every test clock is frozen at
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Service with production defaults and a frozen clock
pub fn build_test_service() -> JobNormalizationService {
    build_service_with_config(&NormalizationConfig::default())
}

pub fn build_service_with_config(config: &NormalizationConfig) -> JobNormalizationService {
    let registry = PatternRegistry::build(config).expect("test config should build");
    JobNormalizationService::with_clock(Arc::new(registry), Arc::new(FixedClock::new(fixed_now())))
}

pub fn assert_score_bounded(score: f64) {
    assert!(
        (0.0..=1.0).contains(&score),
        "quality score {} outside [0, 1]",
        score
    );
}
