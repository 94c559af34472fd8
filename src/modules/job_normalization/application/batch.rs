use serde_json::{Map, Value};

use crate::modules::job_normalization::domain::entities::{NormalizedJobRecord, RawJobFields};
use crate::shared::errors::AppError;

/// Outcome for one slot of a batch, at the same index as its input
#[derive(Debug, Clone, PartialEq)]
pub enum BatchItem {
    Normalized(NormalizedJobRecord),
    /// Normalization failed; the raw fields are kept unchanged
    PassedThrough { raw: RawJobFields, error: AppError },
    /// The batch was cancelled before this record started
    Cancelled { raw: RawJobFields },
}

impl BatchItem {
    pub fn is_normalized(&self) -> bool {
        matches!(self, BatchItem::Normalized(_))
    }

    pub fn normalized(&self) -> Option<&NormalizedJobRecord> {
        match self {
            BatchItem::Normalized(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            BatchItem::PassedThrough { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The normalized mapping, or the raw mapping for slots that did not normalize
    pub fn to_mapping(&self) -> Map<String, Value> {
        match self {
            BatchItem::Normalized(record) => record.to_mapping(),
            BatchItem::PassedThrough { raw, .. } | BatchItem::Cancelled { raw } => raw.to_mapping(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_through_maps_to_raw_fields() {
        let raw = RawJobFields {
            title: Some("  raw title ".to_string()),
            ..Default::default()
        };
        let item = BatchItem::PassedThrough {
            raw: raw.clone(),
            error: AppError::NormalizationError("boom".to_string()),
        };

        assert!(!item.is_normalized());
        assert!(item.normalized().is_none());
        assert_eq!(item.to_mapping(), raw.to_mapping());
        assert_eq!(
            item.error(),
            Some(&AppError::NormalizationError("boom".to_string()))
        );
    }

    #[test]
    fn cancelled_has_no_error() {
        let item = BatchItem::Cancelled {
            raw: RawJobFields::new(),
        };
        assert!(item.error().is_none());
        assert!(item.to_mapping().is_empty());
    }
}
