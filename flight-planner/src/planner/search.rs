//! Route search algorithms.
//!
//! Three independent searches share one connection rule: from a city
//! reached at `time` via `route`, a flight may be taken if it departs no
//! earlier than `time`, lands within the window, and leaves at least
//! `min_layover` after the previous flight landed.
//!
//! - [`Planner::least_flights_earliest_route`] enumerates every feasible
//!   path breadth-first and keeps the best by (hops, arrival).
//! - [`Planner::cheapest_route`] and [`Planner::least_flights_cheapest_route`]
//!   are best-first searches over a score, pruned by the best score seen per
//!   city and capped at `fanout_cap` departures per expansion.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collections::{AssociativeMap, PriorityQueue};
use crate::domain::{City, Fare, Flight, HopsThenFare, Route, TimeWindow};
use crate::source::{FlightSource, SourceError};

use super::config::PlannerConfig;
use super::graph::FlightGraph;

/// What a route is optimised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Fewest flights, then earliest arrival.
    LeastFlightsEarliest,
    /// Lowest total fare.
    Cheapest,
    /// Fewest flights, then lowest total fare.
    LeastFlightsCheapest,
}

/// Origin, destination and time window for a route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin: City,
    pub destination: City,
    pub window: TimeWindow,
}

impl RouteQuery {
    pub fn new(origin: impl Into<City>, destination: impl Into<City>, window: TimeWindow) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            window,
        }
    }
}

/// Search state: a partial route ending at `city` at `time`.
#[derive(Debug, Clone)]
struct SearchState<'a> {
    city: &'a str,
    time: i64,
    route: Route,
}

impl<'a> SearchState<'a> {
    fn origin(city: &'a str, time: i64) -> Self {
        Self {
            city,
            time,
            route: Route::empty(),
        }
    }

    /// State after taking `flight` from here.
    fn board(&self, flight: &'a Arc<Flight>) -> Self {
        Self {
            city: flight.end_city.as_str(),
            time: flight.arrival_time,
            route: self.route.with(Arc::clone(flight)),
        }
    }
}

/// Route planner over an immutable flight graph.
///
/// Each query owns its own frontier and score table, so one planner can
/// serve any number of queries, including from several threads at once.
#[derive(Debug, Clone)]
pub struct Planner {
    graph: FlightGraph,
    config: PlannerConfig,
}

impl Planner {
    /// Build a planner with the default configuration.
    pub fn build<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        Self::with_config(flights, PlannerConfig::default())
    }

    /// Build a planner with a custom configuration.
    pub fn with_config<I>(flights: I, config: PlannerConfig) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        let graph = FlightGraph::build(flights, config.bucket_count);
        Self { graph, config }
    }

    /// Load flights from `source` and build a planner over them.
    pub fn from_source<S>(source: &S, config: PlannerConfig) -> Result<Self, SourceError>
    where
        S: FlightSource + ?Sized,
    {
        let flights = source.flights()?;
        Ok(Self::with_config(flights, config))
    }

    pub fn graph(&self) -> &FlightGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Run the search for `objective`.
    pub fn route(&self, objective: Objective, query: &RouteQuery) -> Route {
        let (start, end) = (query.origin.as_str(), query.destination.as_str());
        let TimeWindow {
            earliest_departure: t1,
            latest_arrival: t2,
        } = query.window;

        match objective {
            Objective::LeastFlightsEarliest => self.least_flights_earliest_route(start, end, t1, t2),
            Objective::Cheapest => self.cheapest_route(start, end, t1, t2),
            Objective::LeastFlightsCheapest => self.least_flights_cheapest_route(start, end, t1, t2),
        }
    }

    /// Route with the fewest flights, ties broken by earliest arrival.
    ///
    /// Explores every time-feasible path breadth-first without pruning
    /// dominated partial paths, so the result is optimal over the whole
    /// search space. On dense graphs with many short hops the number of
    /// enumerated paths can grow exponentially. Returns an empty route if
    /// `end` is unreachable.
    pub fn least_flights_earliest_route(&self, start: &str, end: &str, t1: i64, t2: i64) -> Route {
        let mut queue = VecDeque::new();
        queue.push_back(SearchState::origin(start, t1));

        // (hops, arrival, route)
        let mut best: Option<(usize, i64, Route)> = None;
        let mut states_explored = 0usize;

        while let Some(state) = queue.pop_front() {
            states_explored += 1;

            if state.city == end {
                let hops = state.route.hop_count();
                let improves = best.as_ref().is_none_or(|(best_hops, best_arrival, _)| {
                    hops < *best_hops || (hops == *best_hops && state.time < *best_arrival)
                });
                if improves {
                    trace!(hops, arrival = state.time, "New best route");
                    best = Some((hops, state.time, state.route));
                }
                continue;
            }

            for flight in self.graph.departures(state.city) {
                if self.connects(flight, &state, t2) {
                    queue.push_back(state.board(flight));
                }
            }
        }

        let route = best.map(|(_, _, route)| route).unwrap_or_default();
        debug!(
            start,
            end,
            states_explored,
            hops = route.hop_count(),
            "Least-flights-earliest search complete"
        );
        route
    }

    /// Route with the lowest total fare.
    ///
    /// Only the first `fanout_cap` departures of each city are considered.
    /// Returns an empty route if `end` is unreachable.
    pub fn cheapest_route(&self, start: &str, end: &str, t1: i64, t2: i64) -> Route {
        let route = self.best_first(start, end, t1, t2, Fare::ZERO, |cost, flight| {
            cost + flight.fare
        });
        debug!(
            start,
            end,
            hops = route.hop_count(),
            fare = %route.total_fare(),
            "Cheapest search complete"
        );
        route
    }

    /// Route with the fewest flights, ties broken by lowest total fare.
    ///
    /// Only the first `fanout_cap` departures of each city are considered.
    /// Returns an empty route if `end` is unreachable.
    pub fn least_flights_cheapest_route(&self, start: &str, end: &str, t1: i64, t2: i64) -> Route {
        let route = self.best_first(start, end, t1, t2, HopsThenFare::ZERO, |score, flight| {
            score.extend(flight.fare)
        });
        debug!(
            start,
            end,
            hops = route.hop_count(),
            fare = %route.total_fare(),
            "Least-flights-cheapest search complete"
        );
        route
    }

    /// Best-first search in non-decreasing `score` order.
    ///
    /// A successor is queued only when its score strictly improves on the
    /// best recorded for its city; the record is keyed by city alone and
    /// updated at enqueue time. Returns on the first pop at `end`.
    fn best_first<S, F>(
        &self,
        start: &str,
        end: &str,
        t1: i64,
        t2: i64,
        zero: S,
        step: F,
    ) -> Route
    where
        S: Ord + Copy + std::fmt::Debug,
        F: Fn(S, &Flight) -> S,
    {
        let mut queue = PriorityQueue::new();
        let mut best_scores: AssociativeMap<&str, S> =
            AssociativeMap::with_buckets(self.config.bucket_count);

        best_scores.put(start, zero);
        queue.push(zero, SearchState::origin(start, t1));

        let mut states_explored = 0usize;

        while let Some((score, state)) = queue.pop() {
            states_explored += 1;

            if state.city == end {
                debug!(states_explored, ?score, "Reached destination");
                return state.route;
            }

            trace!(city = state.city, time = state.time, ?score, "Expanding");

            for flight in self
                .graph
                .departures(state.city)
                .iter()
                .take(self.config.fanout_cap)
            {
                if !self.connects(flight, &state, t2) {
                    continue;
                }

                let next = step(score, flight);
                let next_city = flight.end_city.as_str();
                let improves = best_scores
                    .get(next_city)
                    .is_none_or(|recorded| next < *recorded);

                if improves {
                    best_scores.put(next_city, next);
                    queue.push(next, state.board(flight));
                }
            }
        }

        debug!(states_explored, "Frontier exhausted");
        Route::empty()
    }

    /// Whether `flight` can be taken from `state` and still land by `latest_arrival`.
    fn connects(&self, flight: &Flight, state: &SearchState<'_>, latest_arrival: i64) -> bool {
        flight.departure_time >= state.time
            && flight.arrival_time <= latest_arrival
            && state.route.last().is_none_or(|last| {
                flight.departure_time - last.arrival_time >= self.config.min_layover
            })
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
