pub mod normalized_job;
pub mod raw_job;

pub use normalized_job::NormalizedJobRecord;
pub use raw_job::{RawDate, RawJobFields};
