pub mod entities;
pub mod services;
pub mod traits;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{NormalizedJobRecord, RawDate, RawJobFields};
pub use traits::QualitySubject;
