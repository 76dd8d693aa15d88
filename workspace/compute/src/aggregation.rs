//! Totals and shares for the bar and pie charts.
//!
//! Sightings arrive already grouped by zone or by hour; the client only totals
//! them and works out each group's share.

use common::{HourCount, ZoneCount, ZoneId};
use model::TimeRange;

use crate::format_percentage;

pub const NO_DATA_MESSAGE: &str = "No sightings found for the selected date range.";

/// Slice colors of the hourly pie chart, reused cyclically.
pub const PIE_PALETTE: [&str; 24] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042",
    "#A28BFF", "#FF6699", "#33C1FF", "#FFAA33",
    "#66CC66", "#CC6666", "#9966CC", "#6699CC",
    "#FF9966", "#66FFB3", "#B366FF", "#FF6666",
    "#66B2FF", "#FF66B2", "#B2FF66", "#FFB266",
    "#66FF66", "#FF6666", "#6666FF", "#CCCC66",
];

/// A pre-aggregated `{key, count}` row.
pub trait CountRecord {
    type Key: Copy;

    fn key(&self) -> Self::Key;
    fn count(&self) -> u64;
}

impl CountRecord for ZoneCount {
    type Key = ZoneId;

    fn key(&self) -> ZoneId {
        self.zone
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl CountRecord for HourCount {
    type Key = u32;

    fn key(&self) -> u32 {
        self.hour
    }

    fn count(&self) -> u64 {
        self.count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Share<K> {
    pub key: K,
    pub count: u64,
    /// `count / total`, 0 when the total is 0.
    pub fraction: f64,
}

impl<K> Share<K> {
    pub fn percentage(&self) -> String {
        format_percentage(self.fraction)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation<K> {
    pub total: u64,
    pub shares: Vec<Share<K>>,
}

impl<K> Aggregation<K> {
    /// True when there is nothing to chart: no rows, or rows that sum to 0.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty() || self.total == 0
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }
}

pub fn aggregate<R: CountRecord>(records: &[R]) -> Aggregation<R::Key> {
    let total = records.iter().map(CountRecord::count).fold(0u64, u64::saturating_add);
    let shares = records
        .iter()
        .map(|record| Share {
            key: record.key(),
            count: record.count(),
            fraction: if total == 0 {
                0.0
            } else {
                record.count() as f64 / total as f64
            },
        })
        .collect();
    Aggregation { total, shares }
}

fn format_range(range: &TimeRange) -> (String, String) {
    (common::format_date(range.start), common::format_date(range.end))
}

/// Summary line under the zone bar chart; `None` when there is no data.
pub fn zone_summary(aggregation: &Aggregation<ZoneId>, range: &TimeRange) -> Option<String> {
    if aggregation.is_empty() {
        return None;
    }
    let (start, end) = format_range(range);
    Some(format!(
        "Showing {} total sightings across {} zones from {} to {}",
        aggregation.total,
        aggregation.len(),
        start,
        end
    ))
}

/// Summary line under the hourly pie chart; `None` when there is no data.
pub fn hour_summary(aggregation: &Aggregation<u32>, range: &TimeRange) -> Option<String> {
    if aggregation.is_empty() {
        return None;
    }
    let (start, end) = format_range(range);
    let unit = if aggregation.len() == 1 { "hour" } else { "hours" };
    Some(format!(
        "Showing {} total sightings across {} {} from {} to {}",
        aggregation.total,
        aggregation.len(),
        unit,
        start,
        end
    ))
}

/// Pie slice label, e.g. `"8:00 (25.0%)"`.
pub fn hour_slice_label(share: &Share<u32>) -> String {
    format!("{}:00 ({})", share.key, share.percentage())
}

pub fn slice_color(position: usize) -> &'static str {
    PIE_PALETTE[position % PIE_PALETTE.len()]
}
