//! Journey planner API response DTOs.
//!
//! These types map directly to the TfL journey planner JSON responses.
//! They use `Option` for everything because the API omits fields freely;
//! required-ness is enforced in `convert`, not here.

use serde::Deserialize;

/// 300 response from `Journey/JourneyResults` for free-text places.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisambiguationResponse {
    /// Options for the origin text.
    pub from_location_disambiguation: Option<LocationDisambiguation>,

    /// Options for the destination text.
    pub to_location_disambiguation: Option<LocationDisambiguation>,

    /// Options for the via text (unused; we never send one).
    pub via_location_disambiguation: Option<LocationDisambiguation>,
}

/// Disambiguation result for one piece of free text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDisambiguation {
    /// Candidate places, best match first.
    pub disambiguation_options: Option<Vec<DisambiguationOption>>,

    /// "list", "identified", "notidentified", ...
    pub match_status: Option<String>,
}

/// One candidate place.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisambiguationOption {
    /// Value to send back to the API to pick this option.
    pub parameter_value: Option<String>,

    /// Relative match quality (higher is better).
    pub match_quality: Option<i32>,

    /// The place itself.
    pub place: Option<PlaceDto>,
}

/// A place in a disambiguation option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    /// ICS code, present only for places the planner can route to.
    pub ics_code: Option<String>,

    /// Human-readable name.
    pub common_name: Option<String>,

    /// "StopPoint", "PointOfInterest", "Address", ...
    pub place_type: Option<String>,
}

/// 200 response from `Journey/JourneyResults` for two ICS codes.
///
/// Journeys are kept as raw JSON so a single malformed record can be
/// rejected without failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneysResponse {
    pub journeys: Option<Vec<serde_json::Value>>,
}

/// One journey record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    /// Departure time (ISO 8601, usually without offset).
    pub start_date_time: Option<String>,

    /// Arrival time (ISO 8601).
    pub arrival_date_time: Option<String>,

    /// Total duration in minutes.
    pub duration: Option<f64>,

    /// Whether the planner offers this as an alternative to the main route.
    pub alternative_route: Option<bool>,

    /// Legs in travel order.
    pub legs: Option<Vec<LegDto>>,
}

/// One leg of a journey record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub departure_point: Option<PointDto>,

    pub arrival_point: Option<PointDto>,

    pub instruction: Option<InstructionDto>,

    pub mode: Option<ModeDto>,

    /// Leg duration in minutes (not used for pricing).
    pub duration: Option<f64>,
}

/// Departure or arrival point of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDto {
    pub common_name: Option<String>,
}

/// Rider instructions for a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionDto {
    /// One-line summary, e.g. "Victoria line to Oxford Circus".
    pub summary: Option<String>,

    /// Longer form of the instruction.
    pub detailed: Option<String>,
}

/// Transport mode of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeDto {
    pub id: Option<String>,

    /// Mode name, e.g. "tube", "bus", "walking".
    pub name: Option<String>,
}
