//! Web layer for the fare planner.
//!
//! Provides the HTTP endpoint that plans a journey and reports its fare.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
