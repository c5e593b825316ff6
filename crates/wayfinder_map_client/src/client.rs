use std::time::Duration;

use anyhow::Context;
use thiserror::Error;
use tracing::debug;

use crate::payload::MapPayload;

const BASE_URL_ENV_VAR: &str = "MAP_SERVICE_URL";
const TIMEOUT_ENV_VAR: &str = "MAP_SERVICE_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum MapClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Map service error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

pub struct MapServiceClientParams {
    pub base_url: String,
    pub timeout: Duration,
}

/// Client for the external map service that serves cities and connections
/// per map. One fetch per map switch; the result is turned into an immutable
/// Navigator and the payload is not kept.
pub struct MapServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl MapServiceClient {
    pub fn new(params: MapServiceClientParams) -> MapServiceClient {
        let client = reqwest::Client::builder()
            .timeout(params.timeout)
            .build()
            .expect("failed to build the HTTP client");

        MapServiceClient {
            client,
            base_url: params.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Result<MapServiceClient, anyhow::Error> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .with_context(|| format!("{BASE_URL_ENV_VAR} is not set"))?;

        let timeout_secs = match std::env::var(TIMEOUT_ENV_VAR) {
            Ok(value) => value
                .parse::<u64>()
                .with_context(|| format!("{TIMEOUT_ENV_VAR} is not a number of seconds"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(MapServiceClient::new(MapServiceClientParams {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }))
    }

    pub async fn fetch_map(&self, map_id: u64) -> Result<MapPayload, MapClientError> {
        let url = format!("{}/maps/{}", self.base_url, map_id);
        debug!(url = %url, "Fetching map data");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapClientError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
