//! Search configuration for the route planner.

use crate::collections::DEFAULT_BUCKET_COUNT;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Minimum time between one flight's arrival and the next departure.
    /// Tighter connections are rejected.
    pub min_layover: i64,

    /// Maximum number of outgoing flights considered per city by the
    /// cost-aware searches, taken in graph order. Flights past the cap are
    /// never expanded, so those searches may miss routes through very busy
    /// cities.
    pub fanout_cap: usize,

    /// Number of buckets in the graph and per-search score maps.
    pub bucket_count: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_layover: i64, fanout_cap: usize, bucket_count: usize) -> Self {
        Self {
            min_layover,
            fanout_cap,
            bucket_count,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_layover: 20,
            fanout_cap: 100,
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}
