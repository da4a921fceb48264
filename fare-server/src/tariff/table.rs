//! Per-minute tariff table.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::TransportMode;

/// Errors building a tariff table.
#[derive(Debug, thiserror::Error)]
pub enum TariffError {
    /// Rate is negative, NaN or infinite
    #[error("invalid rate {rate} for mode {mode}")]
    InvalidRate { mode: String, rate: f64 },

    /// Key does not name a priceable mode
    #[error("unknown transport mode: {0}")]
    UnknownMode(String),

    /// Failed to read the tariff file
    #[error("failed to read tariff file: {0}")]
    Io(#[from] std::io::Error),

    /// Tariff file is not a JSON object of numbers
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Cost per minute of travel, by transport mode.
///
/// Built once at startup and shared read-only. Modes without a rate
/// (including [`TransportMode::Other`]) cost nothing.
///
/// # Examples
///
/// ```
/// use fare_server::domain::TransportMode;
/// use fare_server::tariff::TariffTable;
///
/// let tariff = TariffTable::default();
/// assert_eq!(tariff.rate(TransportMode::Tube), 0.25);
/// assert_eq!(tariff.rate(TransportMode::Other), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTable {
    rates: HashMap<TransportMode, f64>,
}

impl TariffTable {
    /// Create a table with no rates; every mode costs nothing.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Set the rate for a mode.
    pub fn with_rate(mut self, mode: TransportMode, rate: f64) -> Result<Self, TariffError> {
        if mode == TransportMode::Other {
            return Err(TariffError::UnknownMode(mode.key().to_string()));
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(TariffError::InvalidRate {
                mode: mode.key().to_string(),
                rate,
            });
        }
        self.rates.insert(mode, rate);
        Ok(self)
    }

    /// Parse a JSON object mapping mode keys to per-minute rates.
    ///
    /// Keys accept the same aliases as upstream mode names, so `"tflrail"`
    /// sets the rail rate.
    pub fn from_json_str(json: &str) -> Result<Self, TariffError> {
        let raw: HashMap<String, f64> = serde_json::from_str(json)?;

        raw.into_iter().try_fold(Self::empty(), |table, (key, rate)| {
            let mode = TransportMode::from_key(&key).ok_or(TariffError::UnknownMode(key))?;
            table.with_rate(mode, rate)
        })
    }

    /// Load a tariff from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TariffError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Returns the per-minute rate for a mode, or zero if it has none.
    pub fn rate(&self, mode: TransportMode) -> f64 {
        self.rates.get(&mode).copied().unwrap_or(0.0)
    }

    /// Returns the number of priced modes.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no mode has a rate.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for TariffTable {
    /// Illustrative London rates, in pounds per minute.
    fn default() -> Self {
        let rates = [
            (TransportMode::Bus, 0.15),
            (TransportMode::Overground, 0.20),
            (TransportMode::Tube, 0.25),
            (TransportMode::Dlr, 0.20),
            (TransportMode::Tram, 0.15),
            (TransportMode::Rail, 0.20),
            (TransportMode::River, 0.50),
            (TransportMode::Walking, 0.00),
            (TransportMode::Cycling, 0.05),
            (TransportMode::Taxi, 0.60),
        ];

        Self {
            rates: rates.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_rates() {
        let tariff = TariffTable::default();

        assert_eq!(tariff.len(), TransportMode::PRICED.len());
        assert_eq!(tariff.rate(TransportMode::Bus), 0.15);
        assert_eq!(tariff.rate(TransportMode::River), 0.50);
        assert_eq!(tariff.rate(TransportMode::Walking), 0.0);
        assert_eq!(tariff.rate(TransportMode::Taxi), 0.60);
    }

    #[test]
    fn missing_mode_costs_nothing() {
        let tariff = TariffTable::empty()
            .with_rate(TransportMode::Bus, 0.1)
            .unwrap();

        assert_eq!(tariff.rate(TransportMode::Tube), 0.0);
        assert_eq!(tariff.rate(TransportMode::Other), 0.0);
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(
            TariffTable::empty().with_rate(TransportMode::Bus, -0.1),
            Err(TariffError::InvalidRate { .. })
        ));
        assert!(matches!(
            TariffTable::empty().with_rate(TransportMode::Bus, f64::NAN),
            Err(TariffError::InvalidRate { .. })
        ));
    }

    #[test]
    fn rejects_pricing_other() {
        assert!(matches!(
            TariffTable::empty().with_rate(TransportMode::Other, 1.0),
            Err(TariffError::UnknownMode(_))
        ));
    }

    #[test]
    fn parse_json() {
        let tariff = TariffTable::from_json_str(r#"{"bus": 0.1, "tflrail": 0.3}"#).unwrap();

        assert_eq!(tariff.len(), 2);
        assert_eq!(tariff.rate(TransportMode::Bus), 0.1);
        assert_eq!(tariff.rate(TransportMode::Rail), 0.3);
    }

    #[test]
    fn parse_json_unknown_key() {
        let err = TariffTable::from_json_str(r#"{"hovercraft": 1.0}"#).unwrap_err();
        assert_eq!(err.to_string(), "unknown transport mode: hovercraft");
    }

    #[test]
    fn parse_json_wrong_shape() {
        assert!(matches!(
            TariffTable::from_json_str(r#"{"bus": "cheap"}"#),
            Err(TariffError::Json(_))
        ));
        assert!(matches!(
            TariffTable::from_json_str("[0.1, 0.2]"),
            Err(TariffError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tube": 0.4, "walking": 0}}"#).unwrap();

        let tariff = TariffTable::from_file(file.path()).unwrap();
        assert_eq!(tariff.rate(TransportMode::Tube), 0.4);
        assert_eq!(tariff.rate(TransportMode::Walking), 0.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TariffTable::from_file(dir.path().join("nope.json"));
        assert!(matches!(result, Err(TariffError::Io(_))));
    }
}
