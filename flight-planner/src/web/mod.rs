//! Web layer for the flight route planner.
//!
//! Exposes the three route queries as a JSON endpoint.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
