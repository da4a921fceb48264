//! TfL Journey Planner client.
//!
//! This module provides an HTTP client for the TfL Unified API's journey
//! planner, plus conversion of its responses into domain types.
//!
//! Key characteristics of the journey planner:
//! - Free-text place names come back as a 300 "multiple choices" response
//!   listing disambiguation options, some carrying an ICS code
//! - A second request with two ICS codes returns the actual journeys
//! - Journeys carry a total duration but no per-leg durations or fares

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{TflClient, TflConfig};
pub use convert::{
    ConversionError, NormalizedJourneys, convert_candidates, convert_journey, convert_journeys,
};
pub use error::TflError;
pub use mock::MockTflClient;
pub use source::JourneySource;
pub use types::{
    DisambiguationOption, DisambiguationResponse, InstructionDto, JourneyDto, JourneysResponse,
    LegDto, LocationDisambiguation, ModeDto, PlaceDto, PointDto,
};
