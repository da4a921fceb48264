//! Fare estimation from a per-minute tariff.
//!
//! The journey planner does not return fares, so we estimate one per
//! itinerary from a static table of per-minute rates by transport mode.
//! The estimate is a heuristic, not a real fare.

mod estimate;
mod table;

pub use estimate::{FareError, FareEstimator, estimate_fare};
pub use table::{TariffError, TariffTable};
