//! Human-readable forecast windows.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use common::Bucket;
use tracing::warn;

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

/// Forecast window of a bucket, e.g. `Aug 22 03:35 AM-09:35 AM`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WindowLabel {
    Formatted(String),
    /// No bucket, or the bucket has no start or end timestamp.
    #[default]
    NotAvailable,
    /// A timestamp was present but could not be parsed.
    InvalidDate,
}

impl WindowLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Formatted(label) => label,
            Self::NotAvailable => NOT_AVAILABLE,
            Self::InvalidDate => INVALID_DATE,
        }
    }
}

impl fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a backend timestamp.
///
/// RFC 3339 timestamps carry their own offset. Timestamps with a time but no
/// offset are wall-clock time in `tz`. Bare dates are midnight UTC.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(tz));
    }

    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

pub fn window_label_in<Tz>(bucket: Option<&Bucket>, tz: &Tz) -> WindowLabel
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(bucket) = bucket else {
        return WindowLabel::NotAvailable;
    };
    let (Some(start), Some(end)) = (
        bucket.forecast_start_time.as_deref(),
        bucket.forecast_end_time.as_deref(),
    ) else {
        return WindowLabel::NotAvailable;
    };

    match (parse_timestamp(start, tz), parse_timestamp(end, tz)) {
        (Some(start), Some(end)) => WindowLabel::Formatted(format!(
            "{} {}-{}",
            start.format("%b %-d"),
            start.format("%I:%M %p"),
            end.format("%I:%M %p"),
        )),
        _ => {
            warn!(start, end, bucket = %bucket.time_bucket, "Unparseable forecast timestamps");
            WindowLabel::InvalidDate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn bucket(start: Option<&str>, end: Option<&str>) -> Bucket {
        Bucket {
            time_bucket: "0-6h".to_string(),
            forecast_start_time: start.map(str::to_string),
            forecast_end_time: end.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_label_formats_month_day_and_times() {
        let b = bucket(Some("2025-08-22T03:35:00Z"), Some("2025-08-22T09:35:00Z"));
        assert_eq!(
            window_label_in(Some(&b), &Utc).as_str(),
            "Aug 22 03:35 AM-09:35 AM"
        );
    }

    #[test]
    fn test_label_uses_target_time_zone() {
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
        let b = bucket(Some("2025-08-22T03:35:00Z"), Some("2025-08-22T09:35:00Z"));
        assert_eq!(
            window_label_in(Some(&b), &pacific).as_str(),
            "Aug 21 08:35 PM-02:35 AM"
        );
    }

    #[test]
    fn test_naive_timestamps_are_wall_clock_time() {
        let b = bucket(Some("2025-01-05T18:00:00"), Some("2025-01-06 00:00:00"));
        assert_eq!(
            window_label_in(Some(&b), &Utc).as_str(),
            "Jan 5 06:00 PM-12:00 AM"
        );
    }

    #[test]
    fn test_date_only_and_minute_precision_timestamps() {
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();

        let b = bucket(Some("2025-08-22 03:35"), Some("2025-08-22 09:35"));
        assert_eq!(
            window_label_in(Some(&b), &pacific).as_str(),
            "Aug 22 03:35 AM-09:35 AM"
        );

        let midnight = parse_timestamp("2025-08-22", &pacific).unwrap();
        assert_eq!(midnight.with_timezone(&Utc).to_rfc3339(), "2025-08-22T00:00:00+00:00");
        assert_eq!(midnight.format("%b %-d %I:%M %p").to_string(), "Aug 21 05:00 PM");
    }

    #[test]
    fn test_unparseable_timestamp_yields_sentinel() {
        let b = bucket(Some("yesterday-ish"), Some("2025-08-22T09:35:00Z"));
        assert_eq!(window_label_in(Some(&b), &Utc), WindowLabel::InvalidDate);
        assert_eq!(WindowLabel::InvalidDate.to_string(), "Invalid Date");
    }

    #[test]
    fn test_missing_bucket_or_timestamp_is_not_available() {
        assert_eq!(window_label_in(None, &Utc).as_str(), "N/A");
        let b = bucket(Some("2025-08-22T03:35:00Z"), None);
        assert_eq!(window_label_in(Some(&b), &Utc), WindowLabel::NotAvailable);
    }
}
