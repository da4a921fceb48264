//! Journey leg types.
//!
//! A `Leg` is one directed segment of an itinerary, travelled on a single
//! transport mode.

use crate::maps::directions_url;

use super::TransportMode;

/// One segment of an itinerary.
///
/// Legs are immutable once built. The map link is derived from the leg's
/// endpoints and mode at construction, so it always agrees with them.
///
/// # Examples
///
/// ```
/// use fare_server::domain::{Leg, TransportMode};
///
/// let leg = Leg::new("Oxford Circus", "Bond Street", "Central line to Bond Street", "tube");
/// assert_eq!(leg.mode(), TransportMode::Tube);
/// assert_eq!(
///     leg.map_link(),
///     "https://www.google.com/maps/dir/?api=1&origin=Oxford%20Circus&destination=Bond%20Street&travelmode=tube"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    origin: String,
    destination: String,
    summary: String,
    mode_name: String,
    mode: TransportMode,
    map_link: String,
}

impl Leg {
    /// Build a leg from its departure and arrival names, instruction summary,
    /// and the upstream mode name.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        summary: impl Into<String>,
        mode_name: impl Into<String>,
    ) -> Self {
        let origin = origin.into();
        let destination = destination.into();
        let mode_name = mode_name.into();
        let mode = TransportMode::from_name(&mode_name);
        let map_link = directions_url(&origin, &destination, &mode_name);

        Self {
            origin,
            destination,
            summary: summary.into(),
            mode_name,
            mode,
            map_link,
        }
    }

    /// Returns the departure point name.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the arrival point name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the human instruction summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the mode name exactly as the journey planner sent it.
    pub fn mode_name(&self) -> &str {
        &self.mode_name
    }

    /// Returns the classified transport mode.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Returns the external map directions link for this leg.
    pub fn map_link(&self) -> &str {
        &self.map_link
    }
}
