pub mod batch;
pub mod clock;
pub mod concurrency_calculator;
pub mod diagnostics;
pub mod service;

pub use batch::BatchItem;
pub use clock::{Clock, FixedClock, SystemClock};
pub use diagnostics::{diff_stats, NormalizationStats};
pub use service::JobNormalizationService;
