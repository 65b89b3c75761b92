//! BOE/BORME summary REST API client.

use crate::error::{Error, Result};
use crate::fetcher::SourceFetcher;
use crate::types::Origin;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Base URL for the datos abiertos API.
const DATOS_ABIERTOS_BASE_URL: &str = "https://www.boe.es/datosabiertos/api";

/// Upstream summaries are small; a stalled read should fail rather than
/// hold the whole search open.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// REST client for one gazette source's daily summary endpoint.
#[derive(Debug, Clone)]
pub struct GazetteClient {
    http: reqwest::Client,
    base_url: String,
    origin: Origin,
}

impl GazetteClient {
    /// Create a client for the BOE summary API.
    pub fn boe() -> Self {
        Self::for_origin(Origin::Boe)
    }

    /// Create a client for the BORME summary API.
    pub fn borme() -> Self {
        Self::for_origin(Origin::Borme)
    }

    /// Create a client for the given origin against the public API.
    pub fn for_origin(origin: Origin) -> Self {
        let base_url = format!(
            "{}/{}/sumario",
            DATOS_ABIERTOS_BASE_URL,
            origin.api_segment()
        );
        Self::with_base_url(origin, base_url)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(origin: Origin, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into(),
            origin,
        }
    }

    fn summary_url(&self, formatted_date: &str) -> String {
        format!("{}/{}", self.base_url, formatted_date)
    }

    /// Fetch the raw summary payload for a compact `YYYYMMDD` date.
    pub async fn fetch_summary(&self, formatted_date: &str) -> Result<serde_json::Value> {
        let url = self.summary_url(formatted_date);
        debug!("[{}] Fetching summary from: {}", self.origin, url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "{} request failed with status {}",
                self.origin,
                response.status()
            )));
        }

        let body = response.text().await?;
        let payload: serde_json::Value = serde_json::from_str(&body)?;
        debug!("[{}] Parsed JSON payload", self.origin);
        Ok(payload)
    }
}

#[async_trait]
impl SourceFetcher for GazetteClient {
    fn origin(&self) -> Origin {
        self.origin
    }

    async fn fetch_summary(&self, formatted_date: &str) -> Result<serde_json::Value> {
        GazetteClient::fetch_summary(self, formatted_date).await
    }
}
