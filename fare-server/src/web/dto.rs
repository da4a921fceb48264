//! Data transfer objects for web requests and responses.
//!
//! Response field names are fixed by existing clients, hence the odd
//! underscores and mixed casing.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Leg};
use crate::planner::RankBy;

/// Query string of `GET /get_directions/`.
#[derive(Debug, Default, Deserialize)]
pub struct DirectionsRequest {
    /// Free-text origin
    pub origin: Option<String>,

    /// Free-text destination
    pub destination: Option<String>,

    /// Optional transport mode filter (e.g. "bus")
    pub mode: Option<String>,

    /// Ranking criterion, "fare" (default) or "duration"
    pub sort: Option<RankBy>,
}

/// Successful directions response.
#[derive(Debug, Serialize)]
pub struct DirectionsResponse {
    #[serde(rename = "_status")]
    pub status: String,

    pub lowest_fare_route: RouteResult,
}

/// The chosen itinerary.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    #[serde(rename = "startBy")]
    pub start_by: String,

    #[serde(rename = "arrivedBy")]
    pub arrived_by: String,

    /// Minutes; whole numbers serialize as integers
    pub duration: serde_json::Number,

    #[serde(rename = "alternativeRoute")]
    pub alternative_route: bool,

    /// Pounds, rounded to pence
    pub estimated_fare: f64,

    pub legs: Vec<LegResult>,
}

impl RouteResult {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            start_by: itinerary.start().to_string(),
            arrived_by: itinerary.arrival().to_string(),
            duration: minutes_number(itinerary.duration_mins()),
            alternative_route: itinerary.is_alternative_route(),
            estimated_fare: itinerary
                .estimated_fare()
                .map(|f| f.pounds())
                .unwrap_or_default(),
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
        }
    }
}

fn minutes_number(minutes: f64) -> serde_json::Number {
    if minutes.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&minutes) {
        serde_json::Number::from(minutes as u32)
    } else {
        serde_json::Number::from_f64(minutes).unwrap_or_else(|| 0.into())
    }
}

/// One leg of the chosen itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub destination: String,

    #[serde(rename = "_origin")]
    pub origin: String,

    #[serde(rename = "__Summary")]
    pub summary: String,

    /// Mode name as reported by the journey planner
    pub mode: String,

    /// Google Maps directions link
    pub mps_link: String,
}

impl LegResult {
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            destination: leg.destination().to_string(),
            origin: leg.origin().to_string(),
            summary: leg.summary().to_string(),
            mode: leg.mode_name().to_string(),
            mps_link: leg.map_link().to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
