//! Per-zone probability index of a single forecast bucket.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, TimeZone};
use common::{Bucket, ZoneId};
use tracing::{debug, warn};

use crate::window::{WindowLabel, window_label_in};

/// Most zones a bucket may flag as top-ranked.
pub const TOP_ZONE_LIMIT: usize = 5;

/// Lookup tables derived from one bucket. Rebuilt from scratch whenever the
/// payload or the selected bucket changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneProbabilityIndex {
    pub probability_by_zone: BTreeMap<ZoneId, f64>,
    pub name_by_zone: BTreeMap<ZoneId, String>,
    /// Zones flagged top-ranked, in the order the backend emitted them.
    pub ranked_zones: Vec<ZoneId>,
    pub forecast_window: WindowLabel,
}

/// Missing, non-finite or out-of-range probabilities resolve into `[0, 1]`.
pub fn resolve_probability(probability: Option<f64>) -> f64 {
    match probability {
        Some(p) if p.is_finite() => p.clamp(0.0, 1.0),
        _ => 0.0,
    }
}

impl ZoneProbabilityIndex {
    /// Builds the index with the forecast window in local time.
    pub fn build(bucket: Option<&Bucket>) -> Self {
        Self::build_in(bucket, &Local)
    }

    pub fn build_in<Tz>(bucket: Option<&Bucket>, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let forecast_window = window_label_in(bucket, tz);
        let Some(bucket) = bucket else {
            return Self {
                forecast_window,
                ..Self::default()
            };
        };

        let mut probability_by_zone = BTreeMap::new();
        let mut name_by_zone = BTreeMap::new();
        for prediction in &bucket.zone_predictions {
            probability_by_zone.insert(
                prediction.zone_number,
                resolve_probability(prediction.probability),
            );
            if let Some(name) = &prediction.zone {
                name_by_zone.insert(prediction.zone_number, name.clone());
            }
        }

        // Emission order is kept on purpose; the backend decides the ranking.
        let mut ranked_zones: Vec<ZoneId> = bucket
            .zone_predictions
            .iter()
            .filter(|prediction| prediction.is_top_5)
            .map(|prediction| prediction.zone_number)
            .collect();
        if ranked_zones.len() > TOP_ZONE_LIMIT {
            warn!(
                flagged = ranked_zones.len(),
                bucket = %bucket.time_bucket,
                "Bucket flags more top zones than allowed, truncating"
            );
            ranked_zones.truncate(TOP_ZONE_LIMIT);
        }

        debug!(
            bucket = %bucket.time_bucket,
            zones = probability_by_zone.len(),
            ranked = ranked_zones.len(),
            "Built zone probability index"
        );

        Self {
            probability_by_zone,
            name_by_zone,
            ranked_zones,
            forecast_window,
        }
    }

    /// Probability of `zone`, 0 for zones the bucket does not mention.
    pub fn probability(&self, zone: ZoneId) -> f64 {
        self.probability_by_zone.get(&zone).copied().unwrap_or(0.0)
    }

    pub fn name(&self, zone: ZoneId) -> Option<&str> {
        self.name_by_zone.get(&zone).map(String::as_str)
    }

    pub fn is_ranked(&self, zone: ZoneId) -> bool {
        self.ranked_zones.contains(&zone)
    }

    pub fn is_empty(&self) -> bool {
        self.probability_by_zone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::ZonePrediction;

    fn prediction(zone: ZoneId, name: &str, probability: Option<f64>, top: bool) -> ZonePrediction {
        ZonePrediction {
            zone_number: zone,
            zone: Some(name.to_string()),
            probability,
            is_top_5: top,
        }
    }

    fn bucket(predictions: Vec<ZonePrediction>) -> Bucket {
        Bucket {
            time_bucket: "6-12h".to_string(),
            forecast_start_time: Some("2025-08-22T09:35:00Z".to_string()),
            forecast_end_time: Some("2025-08-22T15:35:00Z".to_string()),
            zone_predictions: predictions,
        }
    }

    #[test]
    fn test_build_without_bucket_is_empty() {
        let index = ZoneProbabilityIndex::build(None);
        assert!(index.probability_by_zone.is_empty());
        assert!(index.name_by_zone.is_empty());
        assert!(index.ranked_zones.is_empty());
        assert_eq!(index.forecast_window.as_str(), "N/A");
    }

    #[test]
    fn test_build_fills_maps_and_window() {
        let b = bucket(vec![
            prediction(1, "San Juan Channel", Some(0.42), false),
            prediction(2, "Haro Strait", Some(0.9), true),
        ]);

        let index = ZoneProbabilityIndex::build_in(Some(&b), &Utc);

        assert_eq!(index.probability(1), 0.42);
        assert_eq!(index.probability(2), 0.9);
        assert_eq!(index.name(2), Some("Haro Strait"));
        assert_eq!(index.ranked_zones, vec![2]);
        assert_eq!(index.forecast_window.as_str(), "Aug 22 09:35 AM-03:35 PM");
    }

    #[test]
    fn test_ranked_zones_keep_emission_order() {
        let b = bucket(vec![
            prediction(10, "a", Some(0.2), true),
            prediction(11, "b", Some(0.1), false),
            prediction(12, "c", Some(0.8), true),
            prediction(13, "d", Some(0.5), true),
        ]);

        let index = ZoneProbabilityIndex::build_in(Some(&b), &Utc);

        // Not sorted by probability.
        assert_eq!(index.ranked_zones, vec![10, 12, 13]);
    }

    #[test]
    fn test_missing_probability_defaults_to_zero() {
        let b = bucket(vec![prediction(7, "Rosario Strait", None, true)]);
        let index = ZoneProbabilityIndex::build_in(Some(&b), &Utc);
        assert_eq!(index.probability(7), 0.0);
        assert!(index.is_ranked(7));
    }

    #[test]
    fn test_probabilities_stay_in_unit_interval() {
        let b = bucket(vec![
            prediction(1, "a", Some(1.7), false),
            prediction(2, "b", Some(-0.3), false),
            prediction(3, "c", Some(f64::NAN), false),
            prediction(4, "d", Some(0.25), false),
        ]);

        let index = ZoneProbabilityIndex::build_in(Some(&b), &Utc);

        for p in index.probability_by_zone.values() {
            assert!((0.0..=1.0).contains(p));
        }
        assert_eq!(index.probability(1), 1.0);
        assert_eq!(index.probability(2), 0.0);
        assert_eq!(index.probability(3), 0.0);
    }

    #[test]
    fn test_ranked_zones_never_exceed_limit() {
        let predictions = (1..=7)
            .map(|zone| prediction(zone, "z", Some(0.5), true))
            .collect();
        let index = ZoneProbabilityIndex::build_in(Some(&bucket(predictions)), &Utc);
        assert_eq!(index.ranked_zones, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unknown_zone_has_zero_probability() {
        let index = ZoneProbabilityIndex::build_in(Some(&bucket(vec![])), &Utc);
        assert_eq!(index.probability(99), 0.0);
        assert_eq!(index.name(99), None);
        assert!(!index.is_ranked(99));
    }
}
