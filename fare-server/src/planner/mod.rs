//! Journey fare planner.
//!
//! This module implements the request pipeline that answers:
//! "Which of the suggested routes between these places is cheapest?"
//!
//! The pipeline resolves free-text places to ICS codes, retrieves journeys,
//! normalizes and prices them, then ranks them and picks one.

mod pipeline;
mod rank;
mod resolve;

pub use pipeline::{PipelineError, PlanOutcome, PlanRequest, Planner, Stage};
pub use rank::{
    RankBy, RankError, rank_by_duration, rank_by_fare, select_cheapest, select_fastest,
};
pub use resolve::{Endpoint, ResolveError, ResolvedPair, resolve_pair};
