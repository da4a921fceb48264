//! Mock journey planner for running without API access.
//!
//! Loads a disambiguation response and a journeys response from JSON files
//! and serves them as if they were live API responses.

use std::path::Path;
use std::sync::Arc;

use crate::domain::IcsCode;

use super::error::TflError;
use super::source::JourneySource;
use super::types::{DisambiguationResponse, JourneysResponse};

/// File holding the disambiguation (300) response.
const DISAMBIGUATION_FILE: &str = "disambiguation.json";

/// File holding the journeys (200) response.
const JOURNEYS_FILE: &str = "journeys.json";

/// Mock journey planner that serves fixed responses.
///
/// Every query gets the same answers regardless of the places asked for.
#[derive(Debug, Clone)]
pub struct MockTflClient {
    disambiguation: Arc<DisambiguationResponse>,
    journeys: Arc<Vec<serde_json::Value>>,
}

impl MockTflClient {
    /// Create a mock from already-parsed responses.
    pub fn new(disambiguation: DisambiguationResponse, journeys: Vec<serde_json::Value>) -> Self {
        Self {
            disambiguation: Arc::new(disambiguation),
            journeys: Arc::new(journeys),
        }
    }

    /// Create a mock by loading `disambiguation.json` and `journeys.json`
    /// from a directory.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, TflError> {
        let data_dir = data_dir.as_ref();

        let disambiguation: DisambiguationResponse =
            load_json(&data_dir.join(DISAMBIGUATION_FILE))?;
        let journeys: JourneysResponse = load_json(&data_dir.join(JOURNEYS_FILE))?;

        Ok(Self::new(
            disambiguation,
            journeys.journeys.unwrap_or_default(),
        ))
    }

    /// Returns the number of journey records served.
    pub fn journey_count(&self) -> usize {
        self.journeys.len()
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, TflError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| TflError::Mock(format!("Failed to read {:?}: {}", path, e)))?;

    serde_json::from_str(&json)
        .map_err(|e| TflError::Mock(format!("Failed to parse {:?}: {}", path, e)))
}

impl JourneySource for MockTflClient {
    async fn disambiguate(
        &self,
        _origin: &str,
        _destination: &str,
        _mode: Option<&str>,
    ) -> Result<DisambiguationResponse, TflError> {
        Ok(DisambiguationResponse::clone(&self.disambiguation))
    }

    async fn journeys(
        &self,
        _from: &IcsCode,
        _to: &IcsCode,
        _mode: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, TflError> {
        Ok(self.journeys.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join(DISAMBIGUATION_FILE),
            r#"{
                "fromLocationDisambiguation": {
                    "disambiguationOptions": [{"place": {"icsCode": "1000129", "commonName": "King's Cross"}}]
                },
                "toLocationDisambiguation": {
                    "disambiguationOptions": [{"place": {"icsCode": "1000173", "commonName": "Oxford Circus"}}]
                }
            }"#,
        )
        .unwrap();
        fs::write(
            dir.join(JOURNEYS_FILE),
            r#"{"journeys": [{"duration": 12}, {"duration": 15}]}"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn load_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let client = MockTflClient::from_dir(dir.path()).unwrap();
        assert_eq!(client.journey_count(), 2);

        let response = client.disambiguate("kings x", "oxford", None).await.unwrap();
        let options = response
            .from_location_disambiguation
            .and_then(|d| d.disambiguation_options)
            .unwrap();
        assert_eq!(options.len(), 1);

        let code = IcsCode::parse("1").unwrap();
        let journeys = client.journeys(&code, &code, Some("bus")).await.unwrap();
        assert_eq!(journeys.len(), 2);
    }

    #[test]
    fn missing_fixture_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MockTflClient::from_dir(dir.path());
        assert!(matches!(result, Err(TflError::Mock(_))));
    }

    #[test]
    fn malformed_fixture_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        fs::write(dir.path().join(JOURNEYS_FILE), "not json").unwrap();

        let err = MockTflClient::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
