//! Disambiguation resolution.
//!
//! Picks one ICS code for each end of the journey from the planner's
//! candidate lists.

use std::fmt;

use crate::domain::{IcsCode, LocationCandidate};

/// Which end of the journey a location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Error from disambiguation resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No candidate for this endpoint carried an ICS code
    #[error("no resolvable location for {endpoint}")]
    AmbiguousLocation { endpoint: Endpoint },
}

/// ICS codes chosen for both ends of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPair {
    pub origin: IcsCode,
    pub destination: IcsCode,
}

/// Choose one ICS code for origin and destination.
///
/// Candidates without a code are ignored. Of the rest, the first in the
/// planner's order wins; no quality ranking is applied.
///
/// # Errors
///
/// Returns `ResolveError::AmbiguousLocation` naming the first endpoint
/// (origin before destination) with no code-bearing candidate.
pub fn resolve_pair(
    origins: &[LocationCandidate],
    destinations: &[LocationCandidate],
) -> Result<ResolvedPair, ResolveError> {
    let origin = first_resolved(origins).ok_or(ResolveError::AmbiguousLocation {
        endpoint: Endpoint::Origin,
    })?;
    let destination = first_resolved(destinations).ok_or(ResolveError::AmbiguousLocation {
        endpoint: Endpoint::Destination,
    })?;

    Ok(ResolvedPair {
        origin: origin.clone(),
        destination: destination.clone(),
    })
}

fn first_resolved(candidates: &[LocationCandidate]) -> Option<&IcsCode> {
    candidates.iter().find_map(|c| c.ics_code.as_ref())
}
