//! Sighting report list.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use common::SightingRecord;
use serde_json::Value;

use crate::aggregation::NO_DATA_MESSAGE;
use crate::window::{INVALID_DATE, parse_timestamp};

/// Display fields of one sighting card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SightingCard {
    pub zone_label: String,
    pub time_label: String,
    pub count_label: String,
    pub direction_label: String,
    pub since_last: Option<String>,
}

/// Header text of the report page.
pub fn sightings_header(count: usize, loading: bool) -> String {
    if loading {
        "Loading...".to_string()
    } else {
        format!("{} sightings found", count)
    }
}

/// Line shown in place of the cards when a finished fetch returned nothing.
pub fn sightings_empty_message(count: usize, loading: bool) -> Option<&'static str> {
    (count == 0 && !loading).then_some(NO_DATA_MESSAGE)
}

/// Orders sightings newest first. Records without a parseable time go last,
/// keeping their relative order.
pub fn newest_first<'a, Tz: TimeZone>(records: &'a [SightingRecord], tz: &Tz) -> Vec<&'a SightingRecord> {
    let mut keyed: Vec<(Option<DateTime<Tz>>, &SightingRecord)> = records
        .iter()
        .map(|record| (record.time.as_deref().and_then(|t| parse_timestamp(t, tz)), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Formats a sighting time as `Aug 22, 2025, 03:35 AM`.
pub fn format_sighting_time<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    raw.and_then(|t| parse_timestamp(t, tz))
        .map(|time| time.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn value_label(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

pub fn sighting_card(record: &SightingRecord) -> SightingCard {
    sighting_card_in(record, &Local)
}

pub fn sighting_card_in<Tz>(record: &SightingRecord, tz: &Tz) -> SightingCard
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    SightingCard {
        zone_label: match record.zone {
            Some(zone) => format!("Zone {}", zone),
            None => "Zone Unknown".to_string(),
        },
        time_label: format_sighting_time(record.time.as_deref(), tz),
        count_label: match record.count {
            Some(count) if count > 0 => count.to_string(),
            _ => "N/A".to_string(),
        },
        direction_label: record
            .direction
            .as_deref()
            .filter(|direction| !direction.is_empty())
            .unwrap_or("Unknown")
            .to_string(),
        since_last: record.time_since_last_sighting.as_ref().and_then(value_label),
    }
}
