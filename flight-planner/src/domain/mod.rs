//! Domain types for the flight route planner.
//!
//! These are the records the planner consumes (`Flight`) and produces
//! (`Route`), plus the identifiers and scores they are built from.

mod city;
mod error;
mod fare;
mod flight;
mod route;
mod score;

pub use city::City;
pub use error::RouteError;
pub use fare::{Fare, InvalidFare};
pub use flight::Flight;
pub use route::{Route, TimeWindow};
pub use score::HopsThenFare;
