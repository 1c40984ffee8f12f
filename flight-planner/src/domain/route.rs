//! Routes and time windows.
//!
//! A `Route` is the output of every planner query: the flights taken, in
//! order. An empty route means no feasible itinerary was found.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{City, Fare, Flight, RouteError};

/// The `[earliest_departure, latest_arrival]` window a route must fit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub earliest_departure: i64,
    pub latest_arrival: i64,
}

impl TimeWindow {
    pub fn new(earliest_departure: i64, latest_arrival: i64) -> Self {
        Self {
            earliest_departure,
            latest_arrival,
        }
    }
}

/// An ordered sequence of flights.
///
/// Flights are shared with the graph they were found in, so cloning a
/// route during search is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    flights: Vec<Arc<Flight>>,
}

impl Route {
    /// The empty route, meaning "no feasible itinerary".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(flights: Vec<Arc<Flight>>) -> Self {
        Self { flights }
    }

    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    pub fn into_flights(self) -> Vec<Arc<Flight>> {
        self.flights
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.flights.len()
    }

    pub fn last(&self) -> Option<&Flight> {
        self.flights.last().map(Arc::as_ref)
    }

    pub fn origin(&self) -> Option<&City> {
        self.flights.first().map(|f| &f.start_city)
    }

    pub fn destination(&self) -> Option<&City> {
        self.flights.last().map(|f| &f.end_city)
    }

    pub fn departure_time(&self) -> Option<i64> {
        self.flights.first().map(|f| f.departure_time)
    }

    pub fn arrival_time(&self) -> Option<i64> {
        self.flights.last().map(|f| f.arrival_time)
    }

    pub fn total_fare(&self) -> Fare {
        self.flights.iter().map(|f| f.fare).sum()
    }

    /// A new route with `flight` appended.
    pub fn with(&self, flight: Arc<Flight>) -> Self {
        let mut flights = Vec::with_capacity(self.flights.len() + 1);
        flights.extend(self.flights.iter().cloned());
        flights.push(flight);
        Self { flights }
    }

    /// Verify the route connects, keeps every layover and fits the window.
    ///
    /// The empty route is always valid.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning from the first flight.
    pub fn check(&self, window: TimeWindow, min_layover: i64) -> Result<(), RouteError> {
        let Some(first) = self.flights.first() else {
            return Ok(());
        };

        if first.departure_time < window.earliest_departure {
            return Err(RouteError::DepartsBeforeWindow {
                departure: first.departure_time,
                earliest: window.earliest_departure,
            });
        }

        for (index, flight) in self.flights.iter().enumerate() {
            if flight.arrival_time > window.latest_arrival {
                return Err(RouteError::ArrivesAfterWindow {
                    index,
                    arrival: flight.arrival_time,
                    latest: window.latest_arrival,
                });
            }
        }

        for (index, pair) in self.flights.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.end_city != next.start_city {
                return Err(RouteError::Disconnected {
                    index: index + 1,
                    arrived_at: prev.end_city.clone(),
                    departs_from: next.start_city.clone(),
                });
            }
            if next.departure_time < prev.arrival_time {
                return Err(RouteError::NotChronological { index: index + 1 });
            }
            let layover = next.departure_time - prev.arrival_time;
            if layover < min_layover {
                return Err(RouteError::LayoverTooShort {
                    index: index + 1,
                    layover,
                    minimum: min_layover,
                });
            }
        }

        Ok(())
    }
}

impl FromIterator<Flight> for Route {
    fn from_iter<I: IntoIterator<Item = Flight>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Arc::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(from: &str, to: &str, dep: i64, arr: i64, fare: f64) -> Flight {
        Flight::new(from, to, dep, arr, Fare::new(fare).unwrap())
    }

    fn window() -> TimeWindow {
        TimeWindow::new(0, 100)
    }

    #[test]
    fn empty_route() {
        let route = Route::empty();
        assert!(route.is_empty());
        assert_eq!(route.hop_count(), 0);
        assert_eq!(route.total_fare(), Fare::ZERO);
        assert_eq!(route.departure_time(), None);
        assert_eq!(route.arrival_time(), None);
        assert!(route.check(window(), 20).is_ok());
    }

    #[test]
    fn accessors() {
        let route: Route = [
            flight("A", "B", 10, 20, 100.0),
            flight("B", "C", 50, 60, 50.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(route.len(), 2);
        assert_eq!(route.origin(), Some(&City::new("A")));
        assert_eq!(route.destination(), Some(&City::new("C")));
        assert_eq!(route.departure_time(), Some(10));
        assert_eq!(route.arrival_time(), Some(60));
        assert_eq!(route.total_fare().value(), 150.0);
        assert!(route.check(window(), 20).is_ok());
    }

    #[test]
    fn with_leaves_base_route_untouched() {
        let base: Route = [flight("A", "B", 10, 20, 1.0)].into_iter().collect();
        let longer = base.with(Arc::new(flight("B", "C", 40, 50, 1.0)));

        assert_eq!(base.len(), 1);
        assert_eq!(longer.len(), 2);
        assert_eq!(longer.last().map(|f| f.end_city.as_str()), Some("C"));
    }

    #[test]
    fn check_reports_short_layover() {
        let route: Route = [
            flight("A", "B", 10, 20, 100.0),
            flight("B", "C", 35, 60, 50.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            route.check(window(), 20),
            Err(RouteError::LayoverTooShort {
                index: 1,
                layover: 15,
                minimum: 20
            })
        );
    }

    #[test]
    fn check_reports_disconnected() {
        let route: Route = [flight("A", "B", 10, 20, 1.0), flight("C", "D", 50, 60, 1.0)]
            .into_iter()
            .collect();

        assert!(matches!(
            route.check(window(), 20),
            Err(RouteError::Disconnected { index: 1, .. })
        ));
    }

    #[test]
    fn check_reports_window_violations() {
        let early: Route = [flight("A", "B", 5, 20, 1.0)].into_iter().collect();
        assert!(matches!(
            early.check(TimeWindow::new(10, 100), 20),
            Err(RouteError::DepartsBeforeWindow { .. })
        ));

        let late: Route = [flight("A", "B", 10, 120, 1.0)].into_iter().collect();
        assert!(matches!(
            late.check(window(), 20),
            Err(RouteError::ArrivesAfterWindow { index: 0, .. })
        ));
    }

    #[test]
    fn check_reports_overlapping_flights() {
        let route: Route = [flight("A", "B", 10, 50, 1.0), flight("B", "C", 40, 60, 1.0)]
            .into_iter()
            .collect();

        assert_eq!(
            route.check(window(), 0),
            Err(RouteError::NotChronological { index: 1 })
        );
    }
}
