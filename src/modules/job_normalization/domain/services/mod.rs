pub mod classifier;
pub mod field_normalizers;
pub mod pattern_registry;
pub mod quality_scorer;
pub mod salary_extractor;
pub mod section_extractor;

pub use classifier::{employment_type, experience_level, extract_categories, extract_skills};
pub use pattern_registry::{NormalizationConfig, NormalizationConfigBuilder, PatternRegistry};
pub use quality_scorer::QualityScorer;
pub use salary_extractor::{extract_salary, SalaryPatternKind, HOURS_PER_YEAR};
pub use section_extractor::{extract_benefits, extract_requirements};
