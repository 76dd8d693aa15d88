use common::ZoneId;

use crate::format_percentage;
use crate::zone_index::ZoneProbabilityIndex;

pub const NO_PREDICTIONS_MESSAGE: &str = "No predictions available";

/// One line of the top zones panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedZone {
    /// 1-based position in the backend's ranking.
    pub position: usize,
    pub zone: ZoneId,
    pub name: String,
    pub probability: f64,
    pub percentage: String,
    pub emphasis_color: &'static str,
}

/// Color of the percentage figure: red above 50%, orange above 30%, blue otherwise.
pub fn emphasis_color(probability: f64) -> &'static str {
    if probability > 0.5 {
        "#d63031"
    } else if probability > 0.3 {
        "#e17055"
    } else {
        "#74b9ff"
    }
}

/// Rows of the top zones panel, in ranked order.
pub fn ranked_summary(index: &ZoneProbabilityIndex) -> Vec<RankedZone> {
    index
        .ranked_zones
        .iter()
        .enumerate()
        .map(|(i, &zone)| {
            let probability = index.probability(zone);
            RankedZone {
                position: i + 1,
                zone,
                name: index
                    .name(zone)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Zone {}", zone)),
                probability,
                percentage: format_percentage(probability),
                emphasis_color: emphasis_color(probability),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_summary_follows_ranked_order() {
        let index = ZoneProbabilityIndex {
            probability_by_zone: BTreeMap::from([(4, 0.25), (9, 0.61), (2, 0.35)]),
            name_by_zone: BTreeMap::from([(4, "Swanson Channel".to_string())]),
            ranked_zones: vec![4, 9, 2],
            ..Default::default()
        };

        let rows = ranked_summary(&index);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].name, "Swanson Channel");
        assert_eq!(rows[0].percentage, "25.0%");
        assert_eq!(rows[0].emphasis_color, "#74b9ff");
        assert_eq!(rows[1].name, "Zone 9");
        assert_eq!(rows[1].emphasis_color, "#d63031");
        assert_eq!(rows[2].emphasis_color, "#e17055");
    }

    #[test]
    fn test_emphasis_thresholds_are_exclusive() {
        assert_eq!(emphasis_color(0.5), "#e17055");
        assert_eq!(emphasis_color(0.3), "#74b9ff");
    }

    #[test]
    fn test_empty_index_has_no_rows() {
        assert!(ranked_summary(&ZoneProbabilityIndex::default()).is_empty());
    }
}
