//! Flight records.

use serde::{Deserialize, Serialize};

use super::{City, Fare};

/// A scheduled flight: a directed, time-stamped edge between two cities.
///
/// Times are opaque integers in a single unit. Records are trusted as
/// given; nothing checks that `arrival_time > departure_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub start_city: City,
    pub end_city: City,
    pub departure_time: i64,
    pub arrival_time: i64,
    pub fare: Fare,
}

impl Flight {
    pub fn new(
        start_city: impl Into<City>,
        end_city: impl Into<City>,
        departure_time: i64,
        arrival_time: i64,
        fare: Fare,
    ) -> Self {
        Self {
            start_city: start_city.into(),
            end_city: end_city.into(),
            departure_time,
            arrival_time,
            fare,
        }
    }

    /// Time in the air.
    pub fn duration(&self) -> i64 {
        self.arrival_time - self.departure_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_record() {
        let json = r#"{
            "start_city": "A",
            "end_city": "B",
            "departure_time": 10,
            "arrival_time": 20,
            "fare": 100
        }"#;
        let flight: Flight = serde_json::from_str(json).unwrap();

        assert_eq!(flight.start_city, City::new("A"));
        assert_eq!(flight.end_city, City::new("B"));
        assert_eq!(flight.departure_time, 10);
        assert_eq!(flight.arrival_time, 20);
        assert_eq!(flight.fare.value(), 100.0);
        assert_eq!(flight.duration(), 10);
    }

    #[test]
    fn deserialize_rejects_negative_fare() {
        let json = r#"{"start_city":"A","end_city":"B","departure_time":1,"arrival_time":2,"fare":-1}"#;
        assert!(serde_json::from_str::<Flight>(json).is_err());
    }
}
