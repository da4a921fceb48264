//! Abstraction over where journey planner responses come from.

use std::future::Future;

use crate::domain::IcsCode;

use super::client::TflClient;
use super::error::TflError;
use super::types::DisambiguationResponse;

/// Trait for providing journey planner responses.
///
/// This abstraction allows the pipeline to be tested with mock data.
pub trait JourneySource {
    /// Disambiguate free-text origin and destination.
    fn disambiguate(
        &self,
        origin: &str,
        destination: &str,
        mode: Option<&str>,
    ) -> impl Future<Output = Result<DisambiguationResponse, TflError>> + Send;

    /// Fetch raw journey records between two resolved locations.
    fn journeys(
        &self,
        from: &IcsCode,
        to: &IcsCode,
        mode: Option<&str>,
    ) -> impl Future<Output = Result<Vec<serde_json::Value>, TflError>> + Send;
}

impl JourneySource for TflClient {
    async fn disambiguate(
        &self,
        origin: &str,
        destination: &str,
        mode: Option<&str>,
    ) -> Result<DisambiguationResponse, TflError> {
        self.fetch_disambiguation(origin, destination, mode).await
    }

    async fn journeys(
        &self,
        from: &IcsCode,
        to: &IcsCode,
        mode: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, TflError> {
        self.fetch_journeys(from, to, mode).await
    }
}
