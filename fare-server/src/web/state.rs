//! Application state for the web layer.

use std::sync::Arc;

use crate::tariff::FareEstimator;

/// Shared application state.
///
/// Read-only after startup; requests share nothing mutable.
pub struct AppState<S> {
    /// Journey planner responses, live or mocked
    pub source: Arc<S>,

    /// Fare estimator with the loaded tariff
    pub estimator: Arc<FareEstimator>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(source: S, estimator: FareEstimator) -> Self {
        Self {
            source: Arc::new(source),
            estimator: Arc::new(estimator),
        }
    }
}

// Derived Clone would require S: Clone.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            estimator: Arc::clone(&self.estimator),
        }
    }
}
