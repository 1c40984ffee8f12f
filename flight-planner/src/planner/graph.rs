//! Adjacency graph of flights keyed by departure city.

use std::sync::Arc;

use tracing::debug;

use crate::collections::AssociativeMap;
use crate::domain::{City, Flight};

/// Outgoing flights per city, in input order.
///
/// Built once and never modified. A city with no departures has no entry;
/// lookups for it yield an empty slice.
#[derive(Debug, Clone)]
pub struct FlightGraph {
    departures: AssociativeMap<City, Vec<Arc<Flight>>>,
    flight_count: usize,
}

impl FlightGraph {
    /// Build the graph, appending each flight under its `start_city`.
    pub fn build<I>(flights: I, bucket_count: usize) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        let mut departures: AssociativeMap<City, Vec<Arc<Flight>>> =
            AssociativeMap::with_buckets(bucket_count);
        let mut flight_count = 0;

        for flight in flights {
            departures
                .get_or_insert_with(flight.start_city.clone(), Vec::new)
                .push(Arc::new(flight));
            flight_count += 1;
        }

        debug!(
            cities = departures.len(),
            flights = flight_count,
            "Built flight graph"
        );

        Self {
            departures,
            flight_count,
        }
    }

    /// Flights leaving `city`, in the order they were supplied.
    pub fn departures(&self, city: &str) -> &[Arc<Flight>] {
        self.departures
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of cities with at least one departure.
    pub fn city_count(&self) -> usize {
        self.departures.len()
    }

    pub fn flight_count(&self) -> usize {
        self.flight_count
    }
}
