//! Conversion from journey planner DTOs to domain types.
//!
//! This is where the loosely-typed upstream JSON is validated: a record
//! missing a required field is rejected here with a `ConversionError`
//! instead of failing somewhere deeper in the pipeline.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{IcsCode, Itinerary, Leg, LocationCandidate};

use super::types::{JourneyDto, LegDto, LocationDisambiguation};

/// Error during DTO to domain conversion.
///
/// Either variant means the upstream record was malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("malformed record: missing required field {0}")]
    MissingField(String),

    /// Record is not shaped like a journey (e.g. wrong field type)
    #[error("malformed record: {0}")]
    InvalidShape(String),
}

/// Outcome of normalizing a batch of journey records.
#[derive(Debug, Clone, Default)]
pub struct NormalizedJourneys {
    /// Successfully converted itineraries, in upstream order.
    pub itineraries: Vec<Itinerary>,

    /// Rejected records as (upstream index, reason).
    pub rejected: Vec<(usize, ConversionError)>,
}

/// Convert raw journey records to itineraries.
///
/// Malformed records are logged and skipped rather than failing the batch;
/// callers decide what to do if nothing survives.
pub fn convert_journeys(records: &[serde_json::Value]) -> NormalizedJourneys {
    let mut normalized = NormalizedJourneys {
        itineraries: Vec::with_capacity(records.len()),
        rejected: Vec::new(),
    };

    for (index, record) in records.iter().enumerate() {
        match convert_journey(record) {
            Ok(itinerary) => normalized.itineraries.push(itinerary),
            Err(e) => {
                warn!(index, error = %e, "skipping journey record");
                normalized.rejected.push((index, e));
            }
        }
    }

    normalized
}

/// Convert one raw journey record to an itinerary.
pub fn convert_journey(record: &serde_json::Value) -> Result<Itinerary, ConversionError> {
    let dto = JourneyDto::deserialize(record)
        .map_err(|e| ConversionError::InvalidShape(e.to_string()))?;
    convert_journey_dto(&dto)
}

/// Convert a typed journey record to an itinerary.
pub fn convert_journey_dto(dto: &JourneyDto) -> Result<Itinerary, ConversionError> {
    let start = required(dto.start_date_time.as_deref(), "startDateTime")?;
    let arrival = required(dto.arrival_date_time.as_deref(), "arrivalDateTime")?;
    let duration = dto
        .duration
        .ok_or_else(|| ConversionError::MissingField("duration".to_string()))?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(ConversionError::InvalidShape(format!(
            "duration {duration} is not a non-negative number of minutes"
        )));
    }
    let raw_legs = dto
        .legs
        .as_ref()
        .ok_or_else(|| ConversionError::MissingField("legs".to_string()))?;

    let legs = raw_legs
        .iter()
        .enumerate()
        .map(|(i, leg)| convert_leg(i, leg))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Itinerary::new(
        start,
        arrival,
        duration,
        dto.alternative_route.unwrap_or(false),
        legs,
    ))
}

/// Convert a single leg. `index` is only used to locate errors.
fn convert_leg(index: usize, leg: &LegDto) -> Result<Leg, ConversionError> {
    let missing = |field: &str| ConversionError::MissingField(format!("legs[{index}].{field}"));

    let origin = leg
        .departure_point
        .as_ref()
        .and_then(|p| p.common_name.as_deref())
        .ok_or_else(|| missing("departurePoint.commonName"))?;

    let destination = leg
        .arrival_point
        .as_ref()
        .and_then(|p| p.common_name.as_deref())
        .ok_or_else(|| missing("arrivalPoint.commonName"))?;

    let summary = leg
        .instruction
        .as_ref()
        .and_then(|i| i.summary.as_deref())
        .ok_or_else(|| missing("instruction.summary"))?;

    let mode = leg
        .mode
        .as_ref()
        .and_then(|m| m.name.as_deref())
        .ok_or_else(|| missing("mode.name"))?;

    Ok(Leg::new(origin, destination, summary, mode))
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ConversionError> {
    value.ok_or_else(|| ConversionError::MissingField(field.to_string()))
}

/// Extract location candidates from one side of a disambiguation response.
///
/// A missing block or option list yields no candidates. Options whose ICS
/// code is absent or unparseable become candidates without an identifier.
/// This is stricter than the upstream, which would accept any `icsCode`
/// string; a code that is not ASCII alphanumeric is treated as missing.
pub fn convert_candidates(
    disambiguation: Option<&LocationDisambiguation>,
) -> Vec<LocationCandidate> {
    let options = disambiguation
        .and_then(|d| d.disambiguation_options.as_deref())
        .unwrap_or(&[]);

    options
        .iter()
        .map(|option| {
            let place = option.place.as_ref();
            let name = place.and_then(|p| p.common_name.clone());
            let ics_code = place
                .and_then(|p| p.ics_code.as_deref())
                .and_then(|code| match IcsCode::parse(code) {
                    Ok(code) => Some(code),
                    Err(e) => {
                        debug!(code, error = %e, "ignoring unusable ICS code");
                        None
                    }
                });

            LocationCandidate { name, ics_code }
        })
        .collect()
}
