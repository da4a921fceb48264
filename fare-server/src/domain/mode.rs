//! Transport mode types.

use std::fmt;

/// A transport mode recognised by the tariff table.
///
/// Upstream mode names are open-ended, so parsing never fails: anything
/// unrecognised becomes [`TransportMode::Other`], which is never priced.
///
/// # Examples
///
/// ```
/// use fare_server::domain::TransportMode;
///
/// assert_eq!(TransportMode::from_name("tube"), TransportMode::Tube);
/// assert_eq!(TransportMode::from_name("national-rail"), TransportMode::Rail);
/// assert_eq!(TransportMode::from_name("gondola"), TransportMode::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    Bus,
    Overground,
    Tube,
    Dlr,
    Tram,
    Rail,
    River,
    Walking,
    Cycling,
    Taxi,
    Other,
}

impl TransportMode {
    /// Every priceable mode, in tariff order.
    pub const PRICED: [TransportMode; 10] = [
        TransportMode::Bus,
        TransportMode::Overground,
        TransportMode::Tube,
        TransportMode::Dlr,
        TransportMode::Tram,
        TransportMode::Rail,
        TransportMode::River,
        TransportMode::Walking,
        TransportMode::Cycling,
        TransportMode::Taxi,
    ];

    /// Classify an upstream mode name.
    ///
    /// Matching is case-insensitive and folds the journey planner's aliases
    /// (e.g. `elizabeth-line`, `river-bus`) onto the tariff's modes.
    pub fn from_name(name: &str) -> Self {
        Self::from_key(name).unwrap_or(TransportMode::Other)
    }

    /// Parse a tariff key, returning `None` for names that are not priceable.
    pub fn from_key(key: &str) -> Option<Self> {
        let mode = match key.trim().to_ascii_lowercase().as_str() {
            "bus" => TransportMode::Bus,
            "overground" => TransportMode::Overground,
            "tube" => TransportMode::Tube,
            "dlr" => TransportMode::Dlr,
            "tram" => TransportMode::Tram,
            "rail" | "tflrail" | "national-rail" | "elizabeth-line" => TransportMode::Rail,
            "river" | "river-bus" | "river-tour" => TransportMode::River,
            "walking" => TransportMode::Walking,
            "cycling" | "cycle" | "cycle-hire" => TransportMode::Cycling,
            "taxi" => TransportMode::Taxi,
            _ => return None,
        };
        Some(mode)
    }

    /// Returns the canonical tariff key for this mode.
    pub fn key(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Overground => "overground",
            TransportMode::Tube => "tube",
            TransportMode::Dlr => "dlr",
            TransportMode::Tram => "tram",
            TransportMode::Rail => "rail",
            TransportMode::River => "river",
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
            TransportMode::Taxi => "taxi",
            TransportMode::Other => "other",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
