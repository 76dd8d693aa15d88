//! Dashboard API client.
//!
//! The client owns URL construction, status checking and JSON decoding. The bytes are
//! moved by a [`Transport`], so the CLI (reqwest) and the browser (gloo-net) share
//! every rule about what counts as a failed request.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, trace};

use crate::error::{FetchError, Result};
use crate::{HourCount, PredictionResponse, SightingRecord, ZoneCount};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves a GET request over the wire.
///
/// Implementations return `FetchError::Network` only when no response was received;
/// any status code, including errors, is handed back as a [`RawResponse`].
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// Paths of the dashboard backend, relative to the base URL.
pub mod endpoints {
    use chrono::NaiveDate;

    use crate::format_date;

    pub const RECENT_PREDICTIONS: &str = "/api/predictions/recent/";

    pub fn sightings_by_zone(start: NaiveDate, end: NaiveDate) -> String {
        format!("/api/sightings/zones/{}/{}/", format_date(start), format_date(end))
    }

    pub fn sightings_by_hour(start: NaiveDate, end: NaiveDate) -> String {
        format!("/api/sightings/byhour/{}/{}/", format_date(start), format_date(end))
    }

    pub fn sightings(start: NaiveDate, end: NaiveDate) -> String {
        format!("/api/sightings/{}/{}/", format_date(start), format_date(end))
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Common GET request handler
    async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET request to: {}", url);

        let response = self.transport.get(&url).await.inspect_err(|e| {
            error!("GET {} - {}", endpoint, e);
        })?;

        if !response.is_success() {
            let err = FetchError::status(response.status);
            error!("GET {} - {}", endpoint, err);
            return Err(err);
        }

        trace!("GET {} - Response received, parsing JSON", endpoint);
        let data = serde_json::from_str::<R>(&response.body).map_err(|e| {
            let err = FetchError::from(e);
            error!("GET {} - {}", endpoint, err);
            err
        })?;

        info!("GET {} - Success", endpoint);
        Ok(data)
    }

    /// Fetches the full multi-bucket forecast. Bucket selection happens client-side.
    #[instrument(skip(self))]
    pub async fn recent_predictions(&self) -> Result<PredictionResponse> {
        let response: PredictionResponse = self.get(endpoints::RECENT_PREDICTIONS).await?;
        debug!(buckets = response.buckets.len(), "Fetched recent predictions");
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn sightings_by_zone(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<ZoneCount>> {
        self.get(&endpoints::sightings_by_zone(start, end)).await
    }

    #[instrument(skip(self))]
    pub async fn sightings_by_hour(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<HourCount>> {
        self.get(&endpoints::sightings_by_hour(start, end)).await
    }

    #[instrument(skip(self))]
    pub async fn sightings(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<SightingRecord>> {
        self.get(&endpoints::sightings(start, end)).await
    }
}
