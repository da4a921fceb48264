//! Itinerary types.
//!
//! An `Itinerary` is one complete journey option returned by the journey
//! planner: when it starts, when it arrives, how long it takes, and the
//! legs travelled in order.

use super::{Fare, Leg};

/// A complete journey option.
///
/// # Invariants
///
/// - Legs are kept in travel order
/// - The estimated fare is absent until a fare estimator has priced the
///   itinerary, and is never changed in place afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    start: String,
    arrival: String,
    duration_mins: f64,
    alternative_route: bool,
    legs: Vec<Leg>,
    estimated_fare: Option<Fare>,
}

impl Itinerary {
    /// Constructs an unpriced itinerary.
    ///
    /// `start` and `arrival` are ISO-8601 timestamps as sent by the journey
    /// planner; they are kept verbatim. The planner reports whole minutes
    /// but any non-negative number is accepted.
    pub fn new(
        start: impl Into<String>,
        arrival: impl Into<String>,
        duration_mins: impl Into<f64>,
        alternative_route: bool,
        legs: Vec<Leg>,
    ) -> Self {
        Self {
            start: start.into(),
            arrival: arrival.into(),
            duration_mins: duration_mins.into(),
            alternative_route,
            legs,
            estimated_fare: None,
        }
    }

    /// Returns this itinerary carrying the given fare.
    pub fn with_estimated_fare(mut self, fare: Fare) -> Self {
        self.estimated_fare = Some(fare);
        self
    }

    /// Returns the start timestamp.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the arrival timestamp.
    pub fn arrival(&self) -> &str {
        &self.arrival
    }

    /// Returns the total duration in minutes.
    pub fn duration_mins(&self) -> f64 {
        self.duration_mins
    }

    /// Returns true if the planner flagged this as an alternative route.
    pub fn is_alternative_route(&self) -> bool {
        self.alternative_route
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the estimated fare, if priced.
    pub fn estimated_fare(&self) -> Option<Fare> {
        self.estimated_fare
    }
}
