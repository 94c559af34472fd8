use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

/// Pay period a salary figure is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryPeriod {
    #[default]
    Yearly,
    Monthly,
    Hourly,
}

/// Structured salary information pulled out of free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInfo {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub currency: String,
    pub period: SalaryPeriod,
    /// Set only when the figure was annualized from an hourly rate
    pub is_estimated: bool,
}

impl SalaryInfo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn range(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn minimum(min: i64) -> Self {
        Self {
            min: Some(min),
            ..Self::default()
        }
    }

    pub fn maximum(max: i64) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn estimated_yearly(min: i64) -> Self {
        Self {
            min: Some(min),
            is_estimated: true,
            ..Self::default()
        }
    }

    pub fn is_present(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// False only when both bounds exist and are inverted
    pub fn is_well_ordered(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Swap inverted bounds so consumers always see `min <= max`
    pub fn ordered(mut self) -> Self {
        if !self.is_well_ordered() {
            std::mem::swap(&mut self.min, &mut self.max);
        }
        self
    }
}

impl Default for SalaryInfo {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            currency: DEFAULT_CURRENCY.to_string(),
            period: SalaryPeriod::Yearly,
            is_estimated: false,
        }
    }
}
