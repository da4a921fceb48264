//! Per-itinerary fare estimation.

use std::sync::Arc;

use crate::domain::{Fare, Itinerary};

use super::TariffTable;

/// Errors from fare estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// Itinerary has no legs to apportion its duration over
    #[error("itinerary has no legs")]
    EmptyItinerary,

    /// Summed cost was not a valid fare
    #[error("estimated fare {0} is not a valid amount")]
    InvalidTotal(f64),
}

/// Estimate the fare of an itinerary.
///
/// The journey planner only gives a total duration, not per-leg durations,
/// so the duration is split equally across legs. Each leg costs its share
/// of minutes times its mode's rate; the total is rounded to pence.
///
/// # Errors
///
/// Returns `FareError::EmptyItinerary` if the itinerary has no legs.
///
/// # Examples
///
/// ```
/// use fare_server::domain::{Itinerary, Leg, TransportMode};
/// use fare_server::tariff::{TariffTable, estimate_fare};
///
/// let tariff = TariffTable::empty()
///     .with_rate(TransportMode::Bus, 0.15).unwrap()
///     .with_rate(TransportMode::Tube, 0.25).unwrap();
///
/// let itinerary = Itinerary::new(
///     "2024-03-04T08:15:00",
///     "2024-03-04T08:25:00",
///     10,
///     false,
///     vec![
///         Leg::new("A", "B", "Bus to B", "bus"),
///         Leg::new("B", "C", "Tube to C", "tube"),
///     ],
/// );
///
/// // 5 minutes each: 5 * 0.15 + 5 * 0.25
/// assert_eq!(estimate_fare(&itinerary, &tariff).unwrap().pounds(), 2.0);
/// ```
pub fn estimate_fare(itinerary: &Itinerary, tariff: &TariffTable) -> Result<Fare, FareError> {
    let legs = itinerary.legs();
    if legs.is_empty() {
        return Err(FareError::EmptyItinerary);
    }

    let per_leg_mins = itinerary.duration_mins() / legs.len() as f64;
    let total: f64 = legs
        .iter()
        .map(|leg| per_leg_mins * tariff.rate(leg.mode()))
        .sum();

    Fare::from_pounds(total).ok_or(FareError::InvalidTotal(total))
}

/// Fare estimator bound to a shared tariff.
#[derive(Debug, Clone)]
pub struct FareEstimator {
    tariff: Arc<TariffTable>,
}

impl FareEstimator {
    /// Create an estimator using the given tariff.
    pub fn new(tariff: Arc<TariffTable>) -> Self {
        Self { tariff }
    }

    /// Returns the tariff in use.
    pub fn tariff(&self) -> &TariffTable {
        &self.tariff
    }

    /// Estimate the fare of an itinerary.
    pub fn estimate(&self, itinerary: &Itinerary) -> Result<Fare, FareError> {
        estimate_fare(itinerary, &self.tariff)
    }

    /// Returns the itinerary with its estimated fare attached.
    pub fn price(&self, itinerary: Itinerary) -> Result<Itinerary, FareError> {
        let fare = self.estimate(&itinerary)?;
        Ok(itinerary.with_estimated_fare(fare))
    }
}

impl Default for FareEstimator {
    fn default() -> Self {
        Self::new(Arc::new(TariffTable::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leg, TransportMode};

    fn itinerary(duration: u32, modes: &[&str]) -> Itinerary {
        let legs = modes
            .iter()
            .enumerate()
            .map(|(i, mode)| Leg::new(format!("S{i}"), format!("S{}", i + 1), "", *mode))
            .collect();
        Itinerary::new("2024-03-04T08:00:00", "2024-03-04T09:00:00", duration, false, legs)
    }

    fn bus_tube_tariff() -> TariffTable {
        TariffTable::empty()
            .with_rate(TransportMode::Bus, 0.15)
            .unwrap()
            .with_rate(TransportMode::Tube, 0.25)
            .unwrap()
    }

    #[test]
    fn two_leg_split() {
        let fare = estimate_fare(&itinerary(10, &["bus", "tube"]), &bus_tube_tariff()).unwrap();
        assert_eq!(fare.pounds(), 2.0);
    }

    #[test]
    fn uneven_split_rounds_to_pence() {
        // 10 / 3 minutes per leg, all bus: 3.333.. * 0.15 * 3 = 1.5
        let fare = estimate_fare(&itinerary(10, &["bus", "bus", "bus"]), &bus_tube_tariff()).unwrap();
        assert_eq!(fare.pounds(), 1.5);

        // 7 / 3 minutes per leg, one tube leg: 2.333.. * 0.25 = 0.5833..
        let fare = estimate_fare(
            &itinerary(7, &["tube", "walking", "walking"]),
            &bus_tube_tariff(),
        )
        .unwrap();
        assert_eq!(fare.pounds(), 0.58);
    }

    #[test]
    fn half_penny_total_rounds_to_even() {
        // Half a minute of tube at 0.25 is exactly 0.125
        let fare = estimate_fare(&itinerary(1, &["tube", "walking"]), &TariffTable::default()).unwrap();
        assert_eq!(fare.pounds(), 0.12);
    }

    #[test]
    fn unknown_mode_is_free() {
        let fare = estimate_fare(&itinerary(30, &["cable-car"]), &TariffTable::default()).unwrap();
        assert_eq!(fare.pounds(), 0.0);
    }

    #[test]
    fn empty_itinerary_fails() {
        let result = estimate_fare(&itinerary(10, &[]), &TariffTable::default());
        assert_eq!(result, Err(FareError::EmptyItinerary));
    }

    #[test]
    fn zero_duration_is_free() {
        let fare = estimate_fare(&itinerary(0, &["taxi"]), &TariffTable::default()).unwrap();
        assert_eq!(fare.pounds(), 0.0);
    }

    #[test]
    fn default_tariff() {
        // 20 minutes of bus at 0.15
        let fare = estimate_fare(&itinerary(20, &["bus"]), &TariffTable::default()).unwrap();
        assert_eq!(fare.pounds(), 3.0);
    }

    #[test]
    fn price_attaches_fare() {
        let estimator = FareEstimator::new(Arc::new(bus_tube_tariff()));
        let priced = estimator.price(itinerary(10, &["bus", "tube"])).unwrap();

        assert_eq!(priced.estimated_fare().map(|f| f.pounds()), Some(2.0));
        assert_eq!(priced.legs().len(), 2);
    }

    #[test]
    fn price_empty_fails() {
        let estimator = FareEstimator::default();
        assert_eq!(
            estimator.price(itinerary(10, &[])),
            Err(FareError::EmptyItinerary)
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(FareError::EmptyItinerary.to_string(), "itinerary has no legs");
    }
}
