use std::fmt::Write;

use anyhow::{Result, bail};
use common::{ApiClient, Transport};
use compute::{ChoroplethStyler, ForecastSnapshot, ForecastView, ZoneCollection, summary::ranked_summary};
use model::TimeBucketStore;
use tracing::{debug, info, trace};

/// Fetches the recent forecast and renders the selected bucket.
///
/// The bucket goes through a [`TimeBucketStore`] so out-of-range indices are rejected
/// before any request is made.
pub async fn forecast<T: Transport>(
    client: &ApiClient<T>,
    bucket: i64,
    zones: Option<&ZoneCollection>,
) -> Result<String> {
    trace!("Entering forecast command");
    let store = TimeBucketStore::default();
    store.set_bucket(bucket)?;
    let bucket = store.bucket();
    debug!("Selected bucket {} ({})", bucket.index(), bucket.label());

    let view = ForecastView::new();
    view.refresh(client.recent_predictions()).await;
    let snapshot = view.forecast(bucket);

    if let Some(error) = &snapshot.error {
        bail!("Forecast unavailable: {}", error);
    }
    if !snapshot.matched {
        info!("No forecast bucket labelled {}", snapshot.bucket_label);
    }

    render(&snapshot, zones)
}

fn render(snapshot: &ForecastSnapshot, zones: Option<&ZoneCollection>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Forecast window: {}", snapshot.index.forecast_window)?;
    writeln!(out, "Bucket: {}", snapshot.bucket_label)?;
    writeln!(out)?;
    writeln!(out, "Top zones")?;

    match snapshot.panel_message() {
        Some(message) => writeln!(out, "  {}", message)?,
        None => {
            for row in ranked_summary(&snapshot.index) {
                writeln!(
                    out,
                    "{:>3}. {:<28} {:>6}  {}",
                    row.position, row.name, row.percentage, row.emphasis_color
                )?;
            }
        }
    }

    if let Some(zones) = zones {
        let styler = ChoroplethStyler::new(&snapshot.index);
        writeln!(out)?;
        writeln!(out, "Map")?;
        for feature in &zones.features {
            let style = styler.style_for(feature.zone);
            let tooltip = styler.tooltip(feature.zone, feature.name.as_deref());
            writeln!(
                out,
                "  {} (ID {}): {} @ {:.2}, border {} {}px, {}",
                tooltip.name,
                tooltip.zone,
                style.fill_color,
                style.fill_opacity,
                style.border_color,
                style.border_weight,
                tooltip.percentage
            )?;
        }
    }

    Ok(out.trim_end().to_string())
}
