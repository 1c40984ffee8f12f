//! Hand-built containers used by the route planner.
//!
//! `PriorityQueue` orders the frontier of the cost-aware searches and
//! `AssociativeMap` backs both the flight graph and per-search score tables.

mod associative_map;
mod priority_queue;

pub use associative_map::{AssociativeMap, DEFAULT_BUCKET_COUNT, DefaultBuildHasher};
pub use priority_queue::PriorityQueue;
