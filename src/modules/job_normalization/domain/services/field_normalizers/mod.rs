pub mod date_normalizer;
pub mod location_normalizer;
pub mod text_cleaner;
pub mod title_normalizer;

pub use date_normalizer::{normalize_date, parse_date_text, DATE_FORMATS};
pub use location_normalizer::{detect_remote_type, normalize_location, resolve_remote_type};
pub use text_cleaner::{clean_text, collapse_whitespace};
pub use title_normalizer::{TitleNormalizer, TitleTransformation};

use crate::modules::job_normalization::domain::services::pattern_registry::PatternRegistry;

/// Run the registry's title pipeline
pub fn normalize_title(registry: &PatternRegistry, raw: &str) -> String {
    registry.title_normalizer().normalize(raw)
}

/// Company names only get their whitespace collapsed
pub fn normalize_company(raw: &str) -> String {
    collapse_whitespace(raw)
}
