use std::time::Duration;

use async_trait::async_trait;
use common::{FetchError, RawResponse, Transport};
use tracing::trace;

/// Native [`Transport`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> common::Result<RawResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::transport)?;
        let status = response.status().as_u16();
        trace!(status, "Response headers received from {}", url);

        let body = response.text().await.map_err(FetchError::transport)?;
        Ok(RawResponse::new(status, body))
    }
}
