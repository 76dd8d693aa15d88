use std::fmt::Write;

use anyhow::Result;
use common::{ApiClient, Transport};
use compute::aggregation::{NO_DATA_MESSAGE, aggregate, zone_summary};
use model::TimeRange;
use tracing::{debug, trace};

/// Sighting totals per zone over `range`.
pub async fn zones<T: Transport>(client: &ApiClient<T>, range: &TimeRange) -> Result<String> {
    trace!("Entering zones command");
    let records = client.sightings_by_zone(range.start, range.end).await?;
    debug!("Received {} zone rows for {}", records.len(), range);

    let aggregation = aggregate(&records);
    let Some(summary) = zone_summary(&aggregation, range) else {
        return Ok(NO_DATA_MESSAGE.to_string());
    };

    let mut out = String::new();
    for share in &aggregation.shares {
        writeln!(
            out,
            "Zone {:<4} {:>6}  {:>6}",
            share.key,
            share.count,
            share.percentage()
        )?;
    }
    write!(out, "{}", summary)?;
    Ok(out)
}
