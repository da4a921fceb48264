//! Journey fare planner server.
//!
//! A web application that answers: "Of the routes the journey planner
//! suggests between these two places, which one is cheapest?"

pub mod domain;
pub mod maps;
pub mod planner;
pub mod tariff;
pub mod tfl;
pub mod web;
