//! Pure derivations behind the dashboard views.
//!
//! Everything here is synchronous and recomputed from scratch whenever a store or
//! a fetched payload changes. "No data" is always a valid input and yields empty
//! or neutral output rather than an error.

pub mod aggregation;
pub mod bucket;
pub mod choropleth;
pub mod error;
pub mod report;
pub mod summary;
pub mod view;
pub mod window;
pub mod zone_index;
pub mod zones;

pub use bucket::{MatchOutcome, match_bucket};
pub use choropleth::{ChoroplethStyler, ZoneStyle, ZoneTooltip};
pub use view::{FetchView, ForecastSnapshot, ForecastView};
pub use window::WindowLabel;
pub use zone_index::ZoneProbabilityIndex;
pub use zones::{Projection, ZoneCollection, ZoneFeature};

/// Formats a fraction as a percentage with one decimal place, e.g. `0.625` -> `"62.5%"`.
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
