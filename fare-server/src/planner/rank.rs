//! Ranking and selection of priced itineraries.
//!
//! Ordering is always stable: itineraries that compare equal keep the
//! order the journey planner returned them in.

use serde::Deserialize;

use crate::domain::{Fare, Itinerary};

/// Errors from ranking or selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// Nothing to rank
    #[error("no routes available")]
    NoRoutesAvailable,

    /// An itinerary reached fare selection without an estimated fare
    #[error("itinerary {index} has no estimated fare")]
    PreconditionFailed { index: usize },
}

/// Criterion for choosing the reported itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    #[default]
    Fare,
    Duration,
}

/// Sort itineraries by ascending duration.
///
/// Equal durations keep their input order.
///
/// # Errors
///
/// Returns `RankError::NoRoutesAvailable` if `itineraries` is empty.
pub fn rank_by_duration(itineraries: &[Itinerary]) -> Result<Vec<Itinerary>, RankError> {
    if itineraries.is_empty() {
        return Err(RankError::NoRoutesAvailable);
    }

    let mut ranked = itineraries.to_vec();
    ranked.sort_by(|a, b| a.duration_mins().total_cmp(&b.duration_mins()));
    Ok(ranked)
}

/// Sort priced itineraries by ascending fare.
///
/// Equal fares keep their input order.
///
/// # Errors
///
/// Returns `RankError::NoRoutesAvailable` if `itineraries` is empty, or
/// `RankError::PreconditionFailed` for the first itinerary lacking a fare.
pub fn rank_by_fare(itineraries: &[Itinerary]) -> Result<Vec<Itinerary>, RankError> {
    if itineraries.is_empty() {
        return Err(RankError::NoRoutesAvailable);
    }
    let fares = fares_of(itineraries)?;

    let mut order: Vec<usize> = (0..itineraries.len()).collect();
    order.sort_by(|&a, &b| fares[a].pounds().total_cmp(&fares[b].pounds()));

    Ok(order.into_iter().map(|i| itineraries[i].clone()).collect())
}

/// Select the itinerary with the lowest estimated fare.
///
/// On ties the earliest itinerary in the input wins.
///
/// # Errors
///
/// Returns `RankError::NoRoutesAvailable` if `itineraries` is empty, or
/// `RankError::PreconditionFailed` for the first itinerary lacking a fare.
pub fn select_cheapest(itineraries: &[Itinerary]) -> Result<&Itinerary, RankError> {
    let fares = fares_of(itineraries)?;

    let mut best: Option<(usize, Fare)> = None;
    for (index, fare) in fares.into_iter().enumerate() {
        match best {
            Some((_, lowest)) if fare.pounds() >= lowest.pounds() => {}
            _ => best = Some((index, fare)),
        }
    }

    best.map(|(index, _)| &itineraries[index])
        .ok_or(RankError::NoRoutesAvailable)
}

/// Select the itinerary with the shortest duration.
///
/// On ties the earliest itinerary in the input wins.
///
/// # Errors
///
/// Returns `RankError::NoRoutesAvailable` if `itineraries` is empty.
pub fn select_fastest(itineraries: &[Itinerary]) -> Result<&Itinerary, RankError> {
    itineraries
        .iter()
        .min_by(|a, b| a.duration_mins().total_cmp(&b.duration_mins()))
        .ok_or(RankError::NoRoutesAvailable)
}

fn fares_of(itineraries: &[Itinerary]) -> Result<Vec<Fare>, RankError> {
    itineraries
        .iter()
        .enumerate()
        .map(|(index, it)| {
            it.estimated_fare()
                .ok_or(RankError::PreconditionFailed { index })
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Leg;
    use proptest::prelude::*;

    fn build(specs: &[(u32, u32)]) -> Vec<Itinerary> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(duration, pence))| {
                Itinerary::new(
                    format!("{i}"),
                    "2024-03-04T10:00:00",
                    duration,
                    false,
                    vec![Leg::new("A", "B", "", "bus")],
                )
                .with_estimated_fare(Fare::from_pounds(f64::from(pence) / 100.0).unwrap())
            })
            .collect()
    }

    fn position(it: &Itinerary) -> usize {
        it.start().parse().unwrap()
    }

    proptest! {
        /// Duration ranking is a stable ascending permutation of the input.
        #[test]
        fn duration_ranking_is_stable(specs in prop::collection::vec((0u32..60, 0u32..500), 1..20)) {
            let input = build(&specs);
            let ranked = rank_by_duration(&input).unwrap();

            prop_assert_eq!(ranked.len(), input.len());
            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.duration_mins() <= b.duration_mins());
                if a.duration_mins() == b.duration_mins() {
                    prop_assert!(position(a) < position(b));
                }
            }
        }

        /// The cheapest selection has the minimum fare and is the first with it.
        #[test]
        fn cheapest_is_first_minimum(specs in prop::collection::vec((0u32..60, 0u32..500), 1..20)) {
            let input = build(&specs);
            let best = select_cheapest(&input).unwrap();
            let min_pence = specs.iter().map(|&(_, p)| p).min().unwrap();
            let first = specs.iter().position(|&(_, p)| p == min_pence).unwrap();

            prop_assert_eq!(position(best), first);
        }

        /// Fare ranking puts the cheapest selection first.
        #[test]
        fn fare_ranking_agrees_with_selection(specs in prop::collection::vec((0u32..60, 0u32..500), 1..20)) {
            let input = build(&specs);
            let ranked = rank_by_fare(&input).unwrap();
            let best = select_cheapest(&input).unwrap();

            prop_assert_eq!(&ranked[0], best);
        }
    }
}
