use crate::modules::job_normalization::domain::services::pattern_registry::PatternRegistry;
use crate::modules::job_normalization::domain::value_objects::SalaryInfo;

/// Working hours in a year (40 hours x 52 weeks) used to annualize hourly rates
pub const HOURS_PER_YEAR: i64 = 2080;

// Amounts: optional thousands separators and cents. Hourly rates are short
// figures without separators.
const RANGE: &str = r"\$((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)\s*-\s*\$((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)";
const YEARLY: &str = r"\$((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)\s*(?:per|/)\s*(?:year|yr|annum)\b";
const RANGE_USD: &str = r"((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)\s*-\s*((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)\s*(?:usd|dollars?)\b";
const HOURLY: &str = r"\$(\d{1,3}(?:\.\d{2})?)\s*(?:per|/)\s*(?:hour|hr)\b";
const UP_TO: &str = r"\bup\s+to\s+\$((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)";
const STARTING_AT: &str = r"\bstarting\s+at\s+\$((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)";

/// The recognised salary phrasings, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryPatternKind {
    /// `$80,000 - $120,000`
    Range,
    /// `$80,000 per year`
    Yearly,
    /// `80,000 - 120,000 USD`
    RangeUsd,
    /// `$40/hour`
    Hourly,
    /// `up to $150,000`
    UpTo,
    /// `starting at $60,000`
    StartingAt,
}

impl SalaryPatternKind {
    pub const ALL: [SalaryPatternKind; 6] = [
        SalaryPatternKind::Range,
        SalaryPatternKind::Yearly,
        SalaryPatternKind::RangeUsd,
        SalaryPatternKind::Hourly,
        SalaryPatternKind::UpTo,
        SalaryPatternKind::StartingAt,
    ];

    /// Regex source for this phrasing
    pub fn pattern(&self) -> &'static str {
        match self {
            SalaryPatternKind::Range => RANGE,
            SalaryPatternKind::Yearly => YEARLY,
            SalaryPatternKind::RangeUsd => RANGE_USD,
            SalaryPatternKind::Hourly => HOURLY,
            SalaryPatternKind::UpTo => UP_TO,
            SalaryPatternKind::StartingAt => STARTING_AT,
        }
    }
}

/// A parsed amount split into whole dollars and cents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    pub dollars: i64,
    pub cents: i64,
}

impl Amount {
    /// Annualize an hourly rate, keeping cents until the final truncation
    pub fn annualized(&self) -> i64 {
        (self.dollars * 100 + self.cents) * HOURS_PER_YEAR / 100
    }
}

/// Parse `"120,000.50"` into dollars and cents. Thousands separators are
/// dropped; a fraction has at most two digits (`"40.5"` is 50 cents).
pub fn parse_amount(text: &str) -> Option<Amount> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits.as_str(), ""),
    };

    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let dollars = whole.parse::<i64>().ok()?;
    let cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        2 => fraction.parse::<i64>().ok()?,
        _ => return None,
    };

    Some(Amount { dollars, cents })
}

/// Find the first salary phrasing in `text`. Absent fields when nothing matches.
pub fn extract_salary(registry: &PatternRegistry, text: &str) -> SalaryInfo {
    if text.trim().is_empty() {
        return SalaryInfo::empty();
    }

    for pattern in registry.salary_patterns() {
        let Some(captures) = pattern.regex.captures(text) else {
            continue;
        };

        let first = captures.get(1).and_then(|m| parse_amount(m.as_str()));
        let second = captures.get(2).and_then(|m| parse_amount(m.as_str()));

        let info = match (pattern.kind, first, second) {
            (SalaryPatternKind::Range | SalaryPatternKind::RangeUsd, Some(min), Some(max)) => {
                SalaryInfo::range(min.dollars, max.dollars)
            }
            (SalaryPatternKind::Yearly | SalaryPatternKind::StartingAt, Some(min), _) => {
                SalaryInfo::minimum(min.dollars)
            }
            (SalaryPatternKind::Hourly, Some(rate), _) => {
                SalaryInfo::estimated_yearly(rate.annualized())
            }
            (SalaryPatternKind::UpTo, Some(max), _) => SalaryInfo::maximum(max.dollars),
            // Overflowing figures are not salaries; keep looking
            _ => continue,
        };

        return info;
    }

    SalaryInfo::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::job_normalization::domain::services::pattern_registry::NormalizationConfig;
    use crate::modules::job_normalization::domain::value_objects::SalaryPeriod;

    fn extract(text: &str) -> SalaryInfo {
        let registry = PatternRegistry::build(&NormalizationConfig::default()).unwrap();
        extract_salary(&registry, text)
    }

    #[test]
    fn parses_amounts_with_separators_and_cents() {
        assert_eq!(parse_amount("120,000"), Some(Amount { dollars: 120_000, cents: 0 }));
        assert_eq!(parse_amount("40.50"), Some(Amount { dollars: 40, cents: 50 }));
        assert_eq!(parse_amount("1,234,567.89"), Some(Amount { dollars: 1_234_567, cents: 89 }));
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn short_fractions_are_padded_and_long_ones_rejected() {
        assert_eq!(parse_amount("40.5"), Some(Amount { dollars: 40, cents: 50 }));
        assert_eq!(parse_amount("40.05"), Some(Amount { dollars: 40, cents: 5 }));
        assert_eq!(parse_amount("40."), Some(Amount { dollars: 40, cents: 0 }));
        assert_eq!(parse_amount("1.234"), None);
        assert_eq!(parse_amount("1.-5"), None);
    }

    #[test]
    fn dollar_range() {
        let salary = extract("Pay: $120,000 - $150,000 per year");
        assert_eq!(salary.min, Some(120_000));
        assert_eq!(salary.max, Some(150_000));
        assert_eq!(salary.currency, "USD");
        assert!(!salary.is_estimated);
    }

    #[test]
    fn yearly_figure_truncates_cents() {
        let salary = extract("$95,000.99/yr plus bonus");
        assert_eq!(salary.min, Some(95_000));
        assert_eq!(salary.max, None);
    }

    #[test]
    fn usd_suffixed_range() {
        let salary = extract("Budget 80,000 - 100,000 USD");
        assert_eq!((salary.min, salary.max), (Some(80_000), Some(100_000)));
    }

    #[test]
    fn hourly_rate_is_annualized() {
        let salary = extract("$40/hour");
        assert_eq!(salary.min, Some(83_200));
        assert_eq!(salary.max, None);
        assert!(salary.is_estimated);
        assert_eq!(salary.period, SalaryPeriod::Yearly);
    }

    #[test]
    fn hourly_cents_survive_annualizing() {
        assert_eq!(extract("$40.50 per hour").min, Some(84_240));
        assert_eq!(extract("$25/hr").min, Some(52_000));
    }

    #[test]
    fn up_to_and_starting_at() {
        let capped = extract("Up to $150,000 depending on experience");
        assert_eq!((capped.min, capped.max), (None, Some(150_000)));

        let floor = extract("Starting at $60,000");
        assert_eq!((floor.min, floor.max), (Some(60_000), None));
    }

    #[test]
    fn range_wins_over_later_patterns() {
        let salary = extract("$100,000 - $130,000, up to $20/hour overtime");
        assert_eq!((salary.min, salary.max), (Some(100_000), Some(130_000)));
    }

    #[test]
    fn no_salary_or_empty_text() {
        assert_eq!(extract(""), SalaryInfo::empty());
        assert_eq!(extract("Competitive pay"), SalaryInfo::empty());
        assert_eq!(extract("Competitive pay").currency, "USD");
    }

    #[test]
    fn ordered_range_keeps_min_below_max() {
        let salary = extract("$90,000 - $110,000");
        assert!(salary.min <= salary.max);
    }
}
