/// Compiled, immutable matchers used by every normalization stage.
///
/// `NormalizationConfig` carries the vocabularies and thresholds;
/// `PatternRegistry::build` turns it into regexes once at startup.
pub mod config;
pub mod registry;

pub use config::{CategoryGroup, NormalizationConfig, NormalizationConfigBuilder, KNOWN_FIELDS};
pub use registry::{PatternRegistry, SalaryPattern};
