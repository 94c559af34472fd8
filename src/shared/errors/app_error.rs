use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Invalid configuration or an uncompilable pattern. Fatal at startup.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A single record could not be normalized. Batches isolate it to one slot.
    #[error("Normalization error: {0}")]
    NormalizationError(String),

    /// A mapping could not be converted to or from a record
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AppError {
    /// Wrap a failure raised while running one normalization stage
    pub fn normalization(stage: &str, cause: impl std::fmt::Display) -> Self {
        AppError::NormalizationError(format!("{} stage failed: {}", stage, cause))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::ConfigurationError(_))
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::ConfigurationError(format!("Pattern failed to compile: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            AppError::NormalizationError("Worker panicked while normalizing record".to_string())
        } else {
            AppError::NormalizationError(format!("Worker task did not complete: {}", err))
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_errors_become_configuration_errors() {
        let err: AppError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(err.is_configuration());
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn normalization_helper_names_the_stage() {
        let err = AppError::normalization("salary", "boom");
        assert_eq!(
            err,
            AppError::NormalizationError("salary stage failed: boom".to_string())
        );
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = AppError::SerializationError("bad".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "SerializationError");
        assert_eq!(json["message"], "bad");
    }
}
