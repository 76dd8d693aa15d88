use std::fmt::Write;

use anyhow::Result;
use chrono::Local;
use common::{ApiClient, Transport};
use compute::report::{newest_first, sighting_card, sightings_empty_message, sightings_header};
use model::TimeRange;
use tracing::{debug, trace};

/// Individual sighting reports over `range`, newest first.
pub async fn sightings<T: Transport>(client: &ApiClient<T>, range: &TimeRange) -> Result<String> {
    trace!("Entering sightings command");
    let records = client.sightings(range.start, range.end).await?;
    debug!("Received {} sighting reports for {}", records.len(), range);

    let mut out = String::new();
    writeln!(out, "{}", sightings_header(records.len(), false))?;
    if let Some(message) = sightings_empty_message(records.len(), false) {
        writeln!(out, "{}", message)?;
    }

    for record in newest_first(&records, &Local) {
        let card = sighting_card(record);
        writeln!(out)?;
        writeln!(out, "{}", card.zone_label)?;
        writeln!(out, "  Time: {}", card.time_label)?;
        writeln!(out, "  Count: {}", card.count_label)?;
        writeln!(out, "  Direction: {}", card.direction_label)?;
        if let Some(since_last) = &card.since_last {
            writeln!(out, "  Since last sighting: {}", since_last)?;
        }
    }

    Ok(out.trim_end().to_string())
}
