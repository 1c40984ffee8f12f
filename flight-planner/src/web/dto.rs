//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Flight, Route, TimeWindow};
use crate::planner::{Objective, RouteQuery};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// City to depart from
    pub origin: String,

    /// City to arrive at
    pub destination: String,

    /// Earliest allowed departure of the first flight
    pub earliest_departure: i64,

    /// Latest allowed arrival of every flight
    pub latest_arrival: i64,

    /// What the route is optimised for
    pub objective: Objective,
}

impl PlanRouteRequest {
    pub fn to_query(&self) -> RouteQuery {
        RouteQuery::new(
            self.origin.as_str(),
            self.destination.as_str(),
            TimeWindow::new(self.earliest_departure, self.latest_arrival),
        )
    }
}

/// A flight in a planned route.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub start_city: String,
    pub end_city: String,
    pub departure_time: i64,
    pub arrival_time: i64,
    pub fare: f64,
}

impl FlightResult {
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            start_city: flight.start_city.to_string(),
            end_city: flight.end_city.to_string(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            fare: flight.fare.value(),
        }
    }
}

/// Response for route planning.
///
/// An unreachable destination is not an error: `found` is false and
/// `flights` is empty.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub objective: Objective,

    /// Whether any feasible route exists
    pub found: bool,

    /// Number of flights taken
    pub hops: usize,

    /// Sum of fares
    pub total_fare: f64,

    /// Departure of the first flight
    pub departure_time: Option<i64>,

    /// Arrival of the last flight
    pub arrival_time: Option<i64>,

    /// Flights in travel order
    pub flights: Vec<FlightResult>,
}

impl PlanRouteResponse {
    pub fn from_route(objective: Objective, route: &Route) -> Self {
        Self {
            objective,
            found: !route.is_empty(),
            hops: route.hop_count(),
            total_fare: route.total_fare().value(),
            departure_time: route.departure_time(),
            arrival_time: route.arrival_time(),
            flights: route
                .flights()
                .iter()
                .map(|f| FlightResult::from_flight(f))
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
