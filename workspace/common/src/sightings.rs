use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ZoneId;

/// Row of `GET /api/sightings/zones/{start}/{end}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: ZoneId,
    pub count: u64,
}

/// Row of `GET /api/sightings/byhour/{start}/{end}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourCount {
    /// Hour of day, 0-23.
    pub hour: u32,
    pub count: u64,
}

/// Row of `GET /api/sightings/{start}/{end}/`.
///
/// Older report imports spell the zone column `ZoneNumber`; both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SightingRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, alias = "ZoneNumber")]
    pub zone: Option<ZoneId>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default, rename = "timeSinceLastSighting")]
    pub time_since_last_sighting: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sighting_accepts_legacy_zone_key() {
        let json = r#"[
            {"zone": 3, "time": "2025-07-01T10:00:00Z", "count": 4, "direction": "north"},
            {"ZoneNumber": 7, "time": "2025-07-02T12:30:00Z"}
        ]"#;

        let records: Vec<SightingRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].zone, Some(3));
        assert_eq!(records[1].zone, Some(7));
        assert_eq!(records[1].count, None);
        assert_eq!(records[1].direction, None);
    }

    #[test]
    fn test_time_since_last_sighting_keeps_raw_value() {
        let json = r#"{"zone": 1, "timeSinceLastSighting": "2 days"}"#;
        let record: SightingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time_since_last_sighting, Some(Value::from("2 days")));
    }

    #[test]
    fn test_zone_and_hour_counts() {
        let zones: Vec<ZoneCount> =
            serde_json::from_str(r#"[{"zone": 1, "count": 5}, {"zone": 2, "count": 3}]"#).unwrap();
        assert_eq!(zones[1], ZoneCount { zone: 2, count: 3 });

        let hours: Vec<HourCount> = serde_json::from_str(r#"[{"hour": 23, "count": 1}]"#).unwrap();
        assert_eq!(hours[0].hour, 23);
    }
}
