//! Transit REST API HTTP client.
//!
//! Provides async methods for the location search, departure board and
//! journey planner endpoints of `v6.db.transport.rest`.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::{Departure, Journey, StopId};

use super::convert::{LocationMatch, convert_departures, convert_journey, convert_locations};
use super::error::UpstreamError;
use super::types::{DeparturesResponse, JourneysResponse, LocationDto};
use super::{DepartureBoard, JourneyPlanner, LocationSearch};

/// Default base URL for the transit API.
pub const DEFAULT_BASE_URL: &str = "https://v6.db.transport.rest";

/// Configuration for the transit client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for the API (defaults to the public instance)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransportConfig {
    /// Create a config pointing at the public instance.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Transit REST API client.
#[derive(Debug, Clone)]
pub struct TransportClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransportClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// GET `path` and decode a non-empty JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "Transit API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, body));
        }

        let body = response.text().await?;
        decode_body(&body)
    }
}

/// Map an error status onto the upstream failure classes.
fn classify_status(status: StatusCode, body: String) -> UpstreamError {
    match status {
        StatusCode::NOT_FOUND => UpstreamError::NotFound,
        StatusCode::BAD_REQUEST => UpstreamError::BadParameter(body),
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => UpstreamError::Busy,
        _ => UpstreamError::Api {
            status: status.as_u16(),
            message: body,
        },
    }
}

/// Decode a successful body. `null`, `{}`, `[]` and blank bodies count as
/// empty answers.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, UpstreamError> {
    if body.trim().is_empty() {
        return Err(UpstreamError::EmptyBody);
    }

    let value: Value = serde_json::from_str(body).map_err(|e| UpstreamError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    let empty = match &value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if empty {
        return Err(UpstreamError::EmptyBody);
    }

    serde_json::from_value(value).map_err(|e| UpstreamError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}

impl LocationSearch for TransportClient {
    async fn search_locations(&self, query: &str) -> Result<Vec<LocationMatch>, UpstreamError> {
        let locations: Vec<LocationDto> = self
            .get_json(
                "/locations",
                &[
                    ("poi", "false".to_string()),
                    ("addresses", "false".to_string()),
                    ("query", query.to_string()),
                ],
            )
            .await?;

        Ok(convert_locations(&locations))
    }
}

impl DepartureBoard for TransportClient {
    async fn departures(
        &self,
        stop: StopId,
        duration_mins: u32,
    ) -> Result<Vec<Departure>, UpstreamError> {
        let board: DeparturesResponse = self
            .get_json(
                &format!("/stops/{stop}/departures"),
                &[("duration", duration_mins.to_string())],
            )
            .await?;

        Ok(convert_departures(&board))
    }
}

impl JourneyPlanner for TransportClient {
    async fn journeys(
        &self,
        from: StopId,
        to: StopId,
        departure: &str,
        results: u8,
    ) -> Result<Vec<Journey>, UpstreamError> {
        let response: JourneysResponse = self
            .get_json(
                "/journeys",
                &[
                    ("from", from.to_string()),
                    ("to", to.to_string()),
                    ("departure", departure.to_string()),
                    ("results", results.to_string()),
                ],
            )
            .await?;

        Ok(response.journeys.iter().map(convert_journey).collect())
    }
}
