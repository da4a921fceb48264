//! Request pipeline from free-text places to one priced itinerary.

use std::fmt;

use tracing::{debug, error, info, warn};

use crate::domain::{Itinerary, format_timestamp};
use crate::tariff::{FareError, FareEstimator};
use crate::tfl::{ConversionError, JourneySource, TflError, convert_candidates, convert_journeys};

use super::rank::{RankBy, RankError, rank_by_duration, select_cheapest, select_fastest};
use super::resolve::{ResolveError, resolve_pair};

/// Pipeline stage, for reporting where a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Request,
    Lookup,
    Resolve,
    Retrieve,
    Normalize,
    Estimate,
    Rank,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Request => "request",
            Stage::Lookup => "lookup",
            Stage::Resolve => "resolve",
            Stage::Retrieve => "retrieve",
            Stage::Normalize => "normalize",
            Stage::Estimate => "estimate",
            Stage::Rank => "rank",
        };
        f.write_str(name)
    }
}

/// Error from the planning pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Request is missing a place
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Disambiguation lookup failed
    #[error("location lookup failed: {0}")]
    Lookup(#[source] TflError),

    /// No usable location for origin or destination
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Journey retrieval failed
    #[error("journey retrieval failed: {0}")]
    Retrieve(#[source] TflError),

    /// Every journey record was malformed
    #[error(transparent)]
    Malformed(#[from] ConversionError),

    /// No itinerary could be priced
    #[error(transparent)]
    Fare(#[from] FareError),

    /// Ranking or selection failed
    #[error(transparent)]
    Rank(#[from] RankError),
}

impl PipelineError {
    /// Returns the stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::InvalidRequest(_) => Stage::Request,
            PipelineError::Lookup(_) => Stage::Lookup,
            PipelineError::Resolve(_) => Stage::Resolve,
            PipelineError::Retrieve(_) => Stage::Retrieve,
            PipelineError::Malformed(_) => Stage::Normalize,
            PipelineError::Fare(_) => Stage::Estimate,
            PipelineError::Rank(_) => Stage::Rank,
        }
    }
}

/// Request for a fare plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Free-text origin.
    pub origin: String,

    /// Free-text destination.
    pub destination: String,

    /// Optional transport mode filter, passed through to the journey planner.
    pub mode: Option<String>,

    /// How to choose the reported itinerary.
    pub rank_by: RankBy,
}

impl PlanRequest {
    /// Create a request with no mode filter, ranked by fare.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode: None,
            rank_by: RankBy::default(),
        }
    }

    /// Set the transport mode filter.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the ranking criterion.
    pub fn with_rank_by(mut self, rank_by: RankBy) -> Self {
        self.rank_by = rank_by;
        self
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.origin.trim().is_empty() {
            return Err(PipelineError::InvalidRequest("origin is empty".to_string()));
        }
        if self.destination.trim().is_empty() {
            return Err(PipelineError::InvalidRequest(
                "destination is empty".to_string(),
            ));
        }
        Ok(())
    }

    fn mode_filter(&self) -> Option<&str> {
        self.mode.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

/// Result of a successful plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    /// Human-readable summary of the choice.
    pub status: String,

    /// The chosen itinerary, with its estimated fare.
    pub itinerary: Itinerary,
}

/// Fare planner over a journey source.
pub struct Planner<'a, S: JourneySource> {
    source: &'a S,
    estimator: &'a FareEstimator,
}

impl<'a, S: JourneySource + Sync> Planner<'a, S> {
    /// Create a new planner.
    pub fn new(source: &'a S, estimator: &'a FareEstimator) -> Self {
        Self { source, estimator }
    }

    /// Plan a journey and pick one itinerary.
    ///
    /// Resolves both places, fetches candidate journeys, prices them, then
    /// ranks by duration and selects according to `request.rank_by`.
    pub async fn plan(&self, request: &PlanRequest) -> Result<PlanOutcome, PipelineError> {
        request.validate()?;
        let mode = request.mode_filter();

        let disambiguation = self
            .source
            .disambiguate(&request.origin, &request.destination, mode)
            .await
            .map_err(PipelineError::Lookup)?;

        let origins = convert_candidates(disambiguation.from_location_disambiguation.as_ref());
        let destinations = convert_candidates(disambiguation.to_location_disambiguation.as_ref());
        debug!(?origins, ?destinations, "location candidates");

        let pair = resolve_pair(&origins, &destinations)?;
        info!(origin = %pair.origin, destination = %pair.destination, "resolved locations");

        let records = self
            .source
            .journeys(&pair.origin, &pair.destination, mode)
            .await
            .map_err(PipelineError::Retrieve)?;

        if records.is_empty() {
            return Err(RankError::NoRoutesAvailable.into());
        }

        let normalized = convert_journeys(&records);
        if normalized.itineraries.is_empty() {
            let (_, first) = normalized
                .rejected
                .into_iter()
                .next()
                .ok_or(RankError::NoRoutesAvailable)?;
            return Err(first.into());
        }

        let priced = self.price_all(normalized.itineraries)?;
        let ranked = rank_by_duration(&priced)?;

        let chosen = match request.rank_by {
            RankBy::Fare => select_cheapest(&ranked)?,
            RankBy::Duration => select_fastest(&ranked)?,
        };

        Ok(PlanOutcome {
            status: status_line(chosen, request.rank_by),
            itinerary: chosen.clone(),
        })
    }

    fn price_all(&self, itineraries: Vec<Itinerary>) -> Result<Vec<Itinerary>, FareError> {
        let mut priced = Vec::with_capacity(itineraries.len());
        let mut last_error = None;

        for (index, itinerary) in itineraries.into_iter().enumerate() {
            match self.estimator.price(itinerary) {
                Ok(it) => priced.push(it),
                Err(e) => {
                    error!(index, error = %e, "dropping unpriceable itinerary");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if priced.is_empty() => Err(e),
            _ => Ok(priced),
        }
    }
}

/// Build the human-readable sentence describing the chosen itinerary.
///
/// An unparseable start time drops the time clause instead of failing.
fn status_line(itinerary: &Itinerary, rank_by: RankBy) -> String {
    let subject = match rank_by {
        RankBy::Fare => "The route with the lowest fare",
        RankBy::Duration => "The fastest route",
    };
    let fare = itinerary.estimated_fare().unwrap_or_default();

    match format_timestamp(itinerary.start()) {
        Ok(start) => format!("{subject} is route with start time {start} and fare £{fare}"),
        Err(e) => {
            warn!(error = %e, "omitting start time from status");
            format!("{subject} has fare £{fare}")
        }
    }
}
