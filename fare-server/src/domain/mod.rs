//! Domain types for the journey fare planner.
//!
//! This module contains the core domain model types that represent
//! validated journey data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod fare;
mod itinerary;
mod leg;
mod location;
mod mode;
mod time;

pub use fare::Fare;
pub use itinerary::Itinerary;
pub use leg::Leg;
pub use location::{IcsCode, InvalidIcsCode, LocationCandidate};
pub use mode::TransportMode;
pub use time::{DISPLAY_FORMAT, TimestampError, format_timestamp};
