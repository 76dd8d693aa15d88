use serde::{Deserialize, Deserializer, Serialize};

use crate::ZoneId;
use crate::serde_helpers::{null_as_default, skip_malformed_entries};

/// Payload of `GET /api/predictions/recent/`: the full 48 hour forecast.
///
/// The backend wraps the buckets in an object, but older deployments return the
/// bucket array directly. Both shapes deserialize into the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub buckets: Vec<Bucket>,
}

impl PredictionResponse {
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self { buckets }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<'de> Deserialize<'de> for PredictionResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Wrapped {
                #[serde(default, deserialize_with = "null_as_default")]
                buckets: Vec<Bucket>,
            },
            Bare(Vec<Bucket>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Wrapped { buckets } | Wire::Bare(buckets) => Self { buckets },
        })
    }
}

/// One six hour forecast window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Window label such as `"0-6h"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_bucket: String,
    /// Timestamps are kept as sent; a bad timestamp degrades the label, not the payload.
    #[serde(default)]
    pub forecast_start_time: Option<String>,
    #[serde(default)]
    pub forecast_end_time: Option<String>,
    /// Entries without a usable `zone_number` are dropped with a warning.
    #[serde(default, deserialize_with = "skip_malformed_entries")]
    pub zone_predictions: Vec<ZonePrediction>,
}

/// Presence probability of a single zone within a bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZonePrediction {
    pub zone_number: ZoneId,
    /// Display name of the zone.
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_top_5: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wrapped_payload() {
        let json = r#"{
            "buckets": [{
                "time_bucket": "0-6h",
                "forecast_start_time": "2025-08-22T03:35:00Z",
                "forecast_end_time": "2025-08-22T09:35:00Z",
                "zone_predictions": [
                    {"zone_number": 4, "zone": "Haro Strait", "probability": 0.82, "is_top_5": true}
                ]
            }]
        }"#;

        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.buckets.len(), 1);
        let bucket = &response.buckets[0];
        assert_eq!(bucket.time_bucket, "0-6h");
        assert_eq!(bucket.zone_predictions[0].zone_number, 4);
        assert_eq!(bucket.zone_predictions[0].zone.as_deref(), Some("Haro Strait"));
        assert!(bucket.zone_predictions[0].is_top_5);
    }

    #[test]
    fn test_deserialize_bare_bucket_array() {
        let json = r#"[{"time_bucket": "6-12h", "zone_predictions": []}]"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.buckets[0].time_bucket, "6-12h");
    }

    #[test]
    fn test_missing_and_null_fields_fall_back_to_defaults() {
        let json = r#"{"buckets": [{
            "time_bucket": null,
            "zone_predictions": [{"zone_number": 9, "probability": null, "is_top_5": null}]
        }]}"#;

        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        let bucket = &response.buckets[0];
        assert_eq!(bucket.time_bucket, "");
        assert_eq!(bucket.forecast_start_time, None);
        let prediction = &bucket.zone_predictions[0];
        assert_eq!(prediction.probability, None);
        assert_eq!(prediction.zone, None);
        assert!(!prediction.is_top_5);
    }

    #[test]
    fn test_bad_zone_number_drops_only_that_prediction() {
        let json = r#"{"buckets": [{
            "time_bucket": "0-6h",
            "zone_predictions": [
                {"zone_number": null, "probability": 0.9},
                {"zone_number": "two", "probability": 0.5},
                {"zone_number": 3, "probability": 0.4, "is_top_5": true}
            ]
        }]}"#;

        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        let predictions = &response.buckets[0].zone_predictions;
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].zone_number, 3);
        assert!(predictions[0].is_top_5);
    }

    #[test]
    fn test_null_prediction_list_is_empty() {
        let json = r#"[{"time_bucket": "0-6h", "zone_predictions": null}]"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert!(response.buckets[0].zone_predictions.is_empty());
    }

    #[test]
    fn test_object_without_buckets_is_empty() {
        let response: PredictionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_non_structured_body_is_rejected() {
        assert!(serde_json::from_str::<PredictionResponse>("\"maintenance\"").is_err());
    }
}
