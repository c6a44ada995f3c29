//! Typed HTTP client for the gateway REST API.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use telemetry_hub_common::{CommandResult, GatewayStatus};

use crate::error::{Error, Result};

/// Client for the three gateway endpoints.
///
/// Wraps one [`reqwest::Client`] and a normalized base URL. Each call maps
/// onto a single HTTP exchange; retry and pacing policy belong to the
/// caller.
pub struct GatewayClient {
    http_client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Build a client for the gateway at `base_url`.
    ///
    /// `request_timeout` bounds every exchange, connect time included, so
    /// a dead gateway surfaces as [`Error::Connectivity`] instead of a
    /// hung call.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized gateway URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /status`: current device state and latest sample, if any.
    pub async fn status(&self) -> Result<GatewayStatus> {
        self.get_json("/status").await
    }

    /// `POST /start`: begin a measurement.
    pub async fn start(&self) -> Result<CommandResult> {
        self.post_json("/start").await
    }

    /// `POST /stop`: end the measurement.
    pub async fn stop(&self) -> Result<CommandResult> {
        self.post_json("/stop").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        decode(path, response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.http_client.post(&url).send().await?;
        decode(path, response).await
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Protocol(format!(
            "{} returned {}: {}",
            path, status, body
        )));
    }

    response.json().await.map_err(Error::from)
}
