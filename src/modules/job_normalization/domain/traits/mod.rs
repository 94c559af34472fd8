pub mod quality_subject;

pub use quality_subject::QualitySubject;
