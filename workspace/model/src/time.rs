use std::fmt;

use chrono::{Days, NaiveDate};

use crate::error::{ModelError, Result};

/// Inclusive date range shared by the calendar-based views.
///
/// Ordering (`start <= end <= today`) is enforced by the date pickers, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeRange {
    /// Length of the range the dashboard opens with.
    pub const DEFAULT_DAYS: u64 = 30;

    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days ending on `today`.
    pub fn ending_on(today: NaiveDate, days: u64) -> Self {
        let start = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    pub fn default_for(today: NaiveDate) -> Self {
        Self::ending_on(today, Self::DEFAULT_DAYS)
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start.format("%Y-%m-%d"), self.end.format("%Y-%m-%d"))
    }
}

/// One of the eight six-hour forecast windows covering the next 48 hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeBucket(u8);

impl TimeBucket {
    pub const COUNT: u8 = 8;
    pub const HOURS: u32 = 6;
    pub const MAX_INDEX: u8 = Self::COUNT - 1;

    pub fn new(index: i64) -> Result<Self> {
        if (0..Self::COUNT as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(ModelError::BucketOutOfRange {
                index,
                max: Self::MAX_INDEX,
            })
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn start_hour(self) -> u32 {
        self.0 as u32 * Self::HOURS
    }

    pub fn end_hour(self) -> u32 {
        (self.0 as u32 + 1) * Self::HOURS
    }

    /// Label the backend uses for this window, e.g. `"6-12h"`.
    pub fn label(self) -> String {
        format!("{}-{}h", self.start_hour(), self.end_hour())
    }

    pub fn all() -> impl Iterator<Item = TimeBucket> {
        (0..Self::COUNT).map(TimeBucket)
    }
}

impl TryFrom<i64> for TimeBucket {
    type Error = ModelError;

    fn try_from(index: i64) -> Result<Self> {
        Self::new(index)
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_labels_at_edges() {
        assert_eq!(TimeBucket::new(0).unwrap().label(), "0-6h");
        assert_eq!(TimeBucket::new(7).unwrap().label(), "42-48h");
    }

    #[test]
    fn test_bucket_windows_tile_48_hours() {
        let buckets: Vec<_> = TimeBucket::all().collect();
        assert_eq!(buckets.len(), 8);
        assert_eq!(buckets[0].start_hour(), 0);
        assert_eq!(buckets[7].end_hour(), 48);

        for pair in buckets.windows(2) {
            assert_eq!(pair[0].end_hour(), pair[1].start_hour());
            assert!(pair[0].start_hour() < pair[1].start_hour());
        }
        for bucket in &buckets {
            assert_eq!(bucket.end_hour() - bucket.start_hour(), 6);
        }
    }

    #[test]
    fn test_bucket_out_of_range_is_rejected() {
        assert_eq!(
            TimeBucket::new(8),
            Err(ModelError::BucketOutOfRange { index: 8, max: 7 })
        );
        assert!(TimeBucket::new(-1).is_err());
        assert!(TimeBucket::try_from(3).is_ok());
    }

    #[test]
    fn test_default_range_is_thirty_days_ending_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let range = TimeRange::default_for(today);
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 2, 13).unwrap());
        assert_eq!(range.end, today);
        assert!(range.is_ordered());
        assert_eq!(range.to_string(), "2025-02-13 to 2025-03-15");
    }
}
