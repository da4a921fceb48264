//! Journey planner HTTP client.
//!
//! Provides async methods for the two journey planner calls the pipeline
//! needs: place disambiguation and journey retrieval. Both hit the same
//! endpoint; the planner decides which response to send from the inputs.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::IcsCode;

use super::error::TflError;
use super::types::{DisambiguationResponse, JourneysResponse};

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of body characters kept in JSON errors.
const ERROR_BODY_CHARS: usize = 500;

/// Configuration for the journey planner client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// App key sent as the `app_key` query parameter, if any
    pub app_key: Option<String>,
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config with production defaults and no app key.
    pub fn new() -> Self {
        Self {
            app_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the app key.
    pub fn with_app_key(mut self, key: impl Into<String>) -> Self {
        self.app_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// TfL journey planner client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: Url,
    app_key: Option<String>,
}

impl TflClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TflError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(TflError::Url(format!(
                "{} cannot be used as a base URL",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            app_key: config.app_key,
        })
    }

    /// Ask the planner to disambiguate free-text origin and destination.
    ///
    /// The planner answers free text with HTTP 300 and a list of options per
    /// place; this method treats that as a normal response.
    pub async fn fetch_disambiguation(
        &self,
        origin: &str,
        destination: &str,
        mode: Option<&str>,
    ) -> Result<DisambiguationResponse, TflError> {
        let url = self.journey_url(origin, destination)?;
        self.get_json(url, mode).await
    }

    /// Fetch journeys between two resolved locations.
    ///
    /// Returns raw journey records in the planner's order.
    pub async fn fetch_journeys(
        &self,
        from: &IcsCode,
        to: &IcsCode,
        mode: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, TflError> {
        let url = self.journey_url(from.as_str(), to.as_str())?;
        let response: JourneysResponse = self.get_json(url, mode).await?;
        Ok(response.journeys.unwrap_or_default())
    }

    /// Build `{base}/Journey/JourneyResults/{from}/to/{to}`.
    ///
    /// Place text is percent-encoded as path segments.
    fn journey_url(&self, from: &str, to: &str) -> Result<Url, TflError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TflError::Url("base URL cannot have path segments".to_string()))?
            .pop_if_empty()
            .extend(["Journey", "JourneyResults", from, "to", to]);
        Ok(url)
    }

    /// Query parameters for a journey request. The app key goes last so
    /// logged URLs never include it.
    fn query_params(&self, mode: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(mode) = mode {
            params.push(("mode", mode.to_string()));
        }
        if let Some(key) = &self.app_key {
            params.push(("app_key", key.clone()));
        }
        params
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        mode: Option<&str>,
    ) -> Result<T, TflError> {
        info!(%url, mode, "requesting journey planner");

        let response = self
            .http
            .get(url)
            .query(&self.query_params(mode))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TflError::Unauthorized);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        // 300 carries the disambiguation options
        if !status.is_success() && status != StatusCode::MULTIPLE_CHOICES {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(ERROR_BODY_CHARS).collect()),
        })
    }
}
