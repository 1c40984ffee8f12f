//! Route planning engine.
//!
//! The planner builds an adjacency graph from a list of flights once, then
//! answers three kinds of query against it:
//!
//! - fewest flights, ties broken by earliest arrival (exhaustive BFS);
//! - lowest total fare (best-first over cumulative fare);
//! - fewest flights, ties broken by lowest fare (best-first over
//!   `(hops, fare)`).
//!
//! Every returned route connects city to city, keeps at least
//! `min_layover` between flights, departs no earlier than `t1` and lands
//! no later than `t2`. An empty route means no such itinerary exists.

mod config;
mod graph;
mod search;

pub use config::PlannerConfig;
pub use graph::FlightGraph;
pub use search::{Objective, Planner, RouteQuery};
