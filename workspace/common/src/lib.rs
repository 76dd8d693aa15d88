//! Common transport-layer types shared between the native CLI and the web frontend.
//! These structs mirror the dashboard backend's response payloads so every client
//! deserializes API responses the same way, and the `ApiClient` issues the same
//! requests regardless of which HTTP stack carries them.

pub mod api;
pub mod error;
mod predictions;
mod serde_helpers;
mod sightings;

pub use api::{ApiClient, RawResponse, Transport, endpoints};
pub use error::{FetchError, Result};
pub use predictions::{Bucket, PredictionResponse, ZonePrediction};
pub use sightings::{HourCount, SightingRecord, ZoneCount};

use chrono::NaiveDate;

/// Identifier of a prediction zone. Joins forecast rows to map features.
pub type ZoneId = u32;

/// Date format used in every sightings endpoint path.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default backend location when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Formats a date the way the backend expects it in URL paths (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "2025-03-07");
    }
}
