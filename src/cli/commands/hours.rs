use std::fmt::Write;

use anyhow::Result;
use common::{ApiClient, Transport};
use compute::aggregation::{NO_DATA_MESSAGE, aggregate, hour_slice_label, hour_summary, slice_color};
use model::TimeRange;
use tracing::{debug, trace};

/// Sighting totals per hour of day over `range`, labelled like the pie chart slices.
pub async fn hours<T: Transport>(client: &ApiClient<T>, range: &TimeRange) -> Result<String> {
    trace!("Entering hours command");
    let records = client.sightings_by_hour(range.start, range.end).await?;
    debug!("Received {} hour rows for {}", records.len(), range);

    let aggregation = aggregate(&records);
    let Some(summary) = hour_summary(&aggregation, range) else {
        return Ok(NO_DATA_MESSAGE.to_string());
    };

    let mut out = String::new();
    for (position, share) in aggregation.shares.iter().enumerate() {
        writeln!(
            out,
            "{:<16} {:>6}  {}",
            hour_slice_label(share),
            share.count,
            slice_color(position)
        )?;
    }
    write!(out, "{}", summary)?;
    Ok(out)
}
