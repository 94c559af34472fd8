pub mod modules;
pub mod shared;

pub use modules::job_normalization::{
    BatchItem, Clock, EmploymentType, ExperienceLevel, FixedClock, JobNormalizationService,
    NormalizationConfig, NormalizationConfigBuilder, NormalizationStats, NormalizedJobRecord,
    PatternRegistry, RawDate, RawJobFields, RemoteType, SalaryInfo, SalaryPeriod, SystemClock,
};
pub use shared::errors::{AppError, AppResult};
