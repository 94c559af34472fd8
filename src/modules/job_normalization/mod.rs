/// Job posting normalization
///
/// Turns heterogeneous scraped job fields into one typed, enriched record.
///
/// Architecture:
/// - Domain: records, value objects, the pattern registry and the pure
///   normalization stages (field normalizers, salary, classifier, sections,
///   quality score)
/// - Application: the service that orchestrates the stages, batch fan-out,
///   the clock seam and diagnostics
pub mod application;
pub mod domain;

// Re-exports for easy access
pub use application::{BatchItem, Clock, FixedClock, JobNormalizationService, NormalizationStats, SystemClock};
pub use domain::services::{NormalizationConfig, NormalizationConfigBuilder, PatternRegistry};
pub use domain::value_objects::{EmploymentType, ExperienceLevel, RemoteType, SalaryInfo, SalaryPeriod};
pub use domain::{NormalizedJobRecord, RawDate, RawJobFields};
