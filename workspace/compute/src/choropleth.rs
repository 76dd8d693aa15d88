//! Map overlay styling derived from a [`ZoneProbabilityIndex`].

use std::fmt;

use common::ZoneId;

use crate::format_percentage;
use crate::zone_index::ZoneProbabilityIndex;

pub const HIGHLIGHT_BORDER_COLOR: &str = "#0d6efd";
pub const NEUTRAL_BORDER_COLOR: &str = "#999";
pub const HIGHLIGHT_FILL_COLOR: &str = "#ff5722";
pub const DEFAULT_FILL_COLOR: &str = "#fffc33ff";
pub const DEFAULT_FILL_OPACITY: f64 = 0.4;
pub const BORDER_WEIGHT: u32 = 3;
/// Top zones reach full opacity at a probability of 1 / 1.4 (about 0.714).
pub const OPACITY_GAIN: f64 = 1.4;

/// Visual style of one zone polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStyle {
    pub border_color: &'static str,
    pub border_weight: u32,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

/// Fill opacity of a top-ranked zone: `min(1.4 p, 1)`.
pub fn top_zone_opacity(probability: f64) -> f64 {
    (probability * OPACITY_GAIN).min(1.0)
}

/// Styles zones against one index.
///
/// Zones outside the top set share a flat style whatever their own probability.
#[derive(Debug, Clone, Copy)]
pub struct ChoroplethStyler<'a> {
    index: &'a ZoneProbabilityIndex,
}

impl<'a> ChoroplethStyler<'a> {
    pub fn new(index: &'a ZoneProbabilityIndex) -> Self {
        Self { index }
    }

    pub fn style_for(&self, zone: ZoneId) -> ZoneStyle {
        if self.index.is_ranked(zone) {
            ZoneStyle {
                border_color: HIGHLIGHT_BORDER_COLOR,
                border_weight: BORDER_WEIGHT,
                fill_color: HIGHLIGHT_FILL_COLOR,
                fill_opacity: top_zone_opacity(self.index.probability(zone)),
            }
        } else {
            ZoneStyle {
                border_color: NEUTRAL_BORDER_COLOR,
                border_weight: BORDER_WEIGHT,
                fill_color: DEFAULT_FILL_COLOR,
                fill_opacity: DEFAULT_FILL_OPACITY,
            }
        }
    }

    /// Tooltip of `zone`. `feature_name` is the boundary asset's own name, used
    /// when the forecast does not name the zone.
    pub fn tooltip(&self, zone: ZoneId, feature_name: Option<&str>) -> ZoneTooltip {
        let name = self
            .index
            .name(zone)
            .or(feature_name)
            .unwrap_or("Unknown Zone")
            .to_string();
        ZoneTooltip {
            name,
            zone,
            percentage: format_percentage(self.index.probability(zone)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTooltip {
    pub name: String,
    pub zone: ZoneId,
    /// Probability as a percentage, e.g. `"82.0%"`.
    pub percentage: String,
}

impl fmt::Display for ZoneTooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nID: {}\nProbability: {}", self.name, self.zone, self.percentage)
    }
}
