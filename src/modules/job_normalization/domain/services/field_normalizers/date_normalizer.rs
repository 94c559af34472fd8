use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::modules::job_normalization::domain::entities::RawDate;
use crate::shared::utils::logger::LogContext;

/// Accepted textual date layouts, tried in order. Parsed times are UTC.
pub const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
];

/// Resolve a raw posting date, falling back to `now` when it is absent or
/// unparseable. Never fails.
pub fn normalize_date(raw: Option<&RawDate>, now: DateTime<Utc>) -> DateTime<Utc> {
    match raw {
        None => now,
        Some(RawDate::Timestamp(timestamp)) => *timestamp,
        Some(RawDate::Epoch(seconds)) => {
            DateTime::from_timestamp(*seconds, 0).unwrap_or_else(|| {
                LogContext::defaulted_field("posted_date", &seconds.to_string(), "now");
                now
            })
        }
        Some(RawDate::Text(text)) => parse_date_text(text).unwrap_or_else(|| {
            if !text.trim().is_empty() {
                LogContext::defaulted_field("posted_date", text, "now");
            }
            now
        }),
        Some(RawDate::Other(value)) => {
            LogContext::defaulted_field("posted_date", &value.to_string(), "now");
            now
        }
    }
}

/// Try each accepted layout, then RFC 3339 with an explicit offset
pub fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| parse_with_format(text, format))
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
}

fn parse_with_format(text: &str, format: &str) -> Option<DateTime<Utc>> {
    let naive = if format.contains("%H") {
        NaiveDateTime::parse_from_str(text, format).ok()?
    } else {
        NaiveDate::parse_from_str(text, format)
            .ok()?
            .and_hms_opt(0, 0, 0)?
    };
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn text(value: &str) -> Option<RawDate> {
        Some(RawDate::Text(value.to_string()))
    }

    #[test]
    fn parses_us_date_as_utc_midnight() {
        let parsed = normalize_date(text("01/15/2024").as_ref(), now());
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn falls_back_to_day_first_when_month_is_out_of_range() {
        let parsed = normalize_date(text("13/01/2024").as_ref(), now());
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 13, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_every_supported_layout() {
        let cases = [
            ("2024-01-15", (2024, 1, 15, 0, 0, 0)),
            ("2024-01-15 08:30:00", (2024, 1, 15, 8, 30, 0)),
            ("2024-01-15T08:30:00", (2024, 1, 15, 8, 30, 0)),
            ("2024-01-15T08:30:00Z", (2024, 1, 15, 8, 30, 0)),
            ("  2024-01-15  ", (2024, 1, 15, 0, 0, 0)),
        ];

        for (input, (y, m, d, h, min, s)) in cases {
            assert_eq!(
                parse_date_text(input),
                Some(Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()),
                "failed to parse '{}'",
                input
            );
        }
    }

    #[test]
    fn accepts_offsets_and_converts_to_utc() {
        assert_eq!(
            parse_date_text("2024-01-15T10:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn timestamps_pass_through() {
        let stamp = Utc.with_ymd_and_hms(2023, 3, 3, 3, 3, 3).unwrap();
        assert_eq!(normalize_date(Some(&RawDate::Timestamp(stamp)), now()), stamp);
    }

    #[test]
    fn epoch_seconds_are_converted() {
        assert_eq!(
            normalize_date(Some(&RawDate::Epoch(1_705_312_800)), now()),
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
        );
        assert_eq!(normalize_date(Some(&RawDate::Epoch(i64::MAX)), now()), now());
    }

    #[test]
    fn unrecognized_values_default_to_now() {
        let value = serde_json::json!([2024, 1, 15]);
        assert_eq!(normalize_date(Some(&RawDate::Other(value)), now()), now());
    }

    #[test]
    fn missing_or_garbage_defaults_to_now() {
        assert_eq!(normalize_date(None, now()), now());
        assert_eq!(normalize_date(text("yesterday").as_ref(), now()), now());
        assert_eq!(normalize_date(text("").as_ref(), now()), now());
        assert_eq!(normalize_date(text("02/30/2024").as_ref(), now()), now());
    }
}
