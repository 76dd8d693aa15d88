use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use common::ApiClient;
use compute::ZoneCollection;
use model::{TimeRange, TimeRangeStore};
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::transport::HttpTransport;

pub mod commands;

use commands::{forecast, hours, sightings, zones};

#[derive(Parser)]
#[command(name = "orcawatch")]
#[command(about = "Orca sighting forecasts and sighting statistics from the command line")]
#[command(version)]
pub struct Cli {
    /// Base URL of the backend, overriding orcawatch.toml and ORCAWATCH_API_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Date range of the statistics commands. Omitted bounds fall back to the last 30 days.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First day, YYYY-MM-DD
    #[arg(long, env = "ORCAWATCH_START")]
    pub start: Option<NaiveDate>,

    /// Last day, YYYY-MM-DD
    #[arg(long, env = "ORCAWATCH_END")]
    pub end: Option<NaiveDate>,
}

impl RangeArgs {
    /// Applies the given bounds to a range store seeded with the default range.
    pub fn resolve(&self, store: &TimeRangeStore) -> TimeRange {
        let current = store.range();
        store.set_range(
            self.start.unwrap_or(current.start),
            self.end.unwrap_or(current.end),
        );
        store.range()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the forecast of one 6-hour window
    ///
    /// Buckets are numbered 0 to 7: 0 is the next 0-6h, 7 is 42-48h ahead.
    Forecast {
        /// Forecast window index
        #[arg(short, long, default_value_t = 0)]
        bucket: i64,

        /// GeoJSON zone boundaries; when given, every zone's map style is printed too
        #[arg(short, long)]
        zones: Option<PathBuf>,
    },
    /// Sighting totals per zone
    Zones(RangeArgs),
    /// Sighting totals per hour of day
    Hours(RangeArgs),
    /// Individual sighting reports, newest first
    Sightings(RangeArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = DashboardConfig::load()?.with_base_url(self.base_url);
        let transport = HttpTransport::new(Duration::from_secs(config.request_timeout_secs))
            .context("Failed to build HTTP client")?;
        let client = ApiClient::new(transport, config.api_base_url);
        let ranges = TimeRangeStore::default();

        let report = match self.command {
            Commands::Forecast { bucket, zones } => {
                let collection = match zones {
                    Some(path) => Some(load_zones(&path)?),
                    None => None,
                };
                forecast(&client, bucket, collection.as_ref()).await?
            }
            Commands::Zones(range) => zones(&client, &range.resolve(&ranges)).await?,
            Commands::Hours(range) => hours(&client, &range.resolve(&ranges)).await?,
            Commands::Sightings(range) => sightings(&client, &range.resolve(&ranges)).await?,
        };

        println!("{}", report);
        Ok(())
    }
}

fn load_zones(path: &Path) -> Result<ZoneCollection> {
    debug!("Reading zone boundaries from {}", path.display());
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read zone boundaries from {}", path.display()))?;
    let zones = ZoneCollection::from_geojson(&json)?;
    info!("Loaded {} zones from {}", zones.features.len(), path.display());
    Ok(zones)
}
