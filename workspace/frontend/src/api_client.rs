use async_trait::async_trait;
use common::{ApiClient, FetchError, RawResponse, Transport};
use gloo_net::http::Request;

use crate::settings;

/// Browser [`Transport`] backed by the fetch API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> common::Result<RawResponse> {
        log::trace!("GET {} - Sending request", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::transport)?;
        Ok(RawResponse::new(status, body))
    }
}

/// Client for the backend configured in the current settings.
pub fn client() -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport, settings::get_settings().api_base_url())
}
