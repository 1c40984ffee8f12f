//! Fare amounts.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid fare.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid fare {value}: {reason}")]
pub struct InvalidFare {
    value: f64,
    reason: &'static str,
}

/// A non-negative, finite fare.
///
/// Fares are totally ordered so they can key a priority queue.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Fare;
///
/// let a = Fare::new(100.0).unwrap();
/// let b = Fare::new(50.0).unwrap();
/// assert_eq!((a + b).value(), 150.0);
/// assert!(b < a);
///
/// assert!(Fare::new(-1.0).is_err());
/// assert!(Fare::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fare(f64);

impl Fare {
    pub const ZERO: Fare = Fare(0.0);

    /// Create a fare, rejecting negative and non-finite amounts.
    pub fn new(value: f64) -> Result<Self, InvalidFare> {
        if !value.is_finite() {
            return Err(InvalidFare {
                value,
                reason: "must be finite",
            });
        }
        if value < 0.0 {
            return Err(InvalidFare {
                value,
                reason: "must not be negative",
            });
        }
        // Normalise -0.0 so equality and ordering agree
        Ok(Fare(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Fare {
    type Error = InvalidFare;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Fare::new(value)
    }
}

impl From<Fare> for f64 {
    fn from(fare: Fare) -> Self {
        fare.0
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        Fare(self.0 + rhs.0)
    }
}

impl PartialEq for Fare {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fare {}

impl PartialOrd for Fare {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fare {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Debug for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fare({})", self.0)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::iter::Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Self {
        iter.fold(Fare::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid() {
        assert!(Fare::new(-0.01).is_err());
        assert!(Fare::new(f64::INFINITY).is_err());
        assert!(Fare::new(f64::NAN).is_err());
    }

    #[test]
    fn negative_zero_equals_zero() {
        let fare = Fare::new(-0.0).unwrap();
        assert_eq!(fare, Fare::ZERO);
        assert_eq!(fare.cmp(&Fare::ZERO), Ordering::Equal);
    }

    #[test]
    fn ordering_and_sum() {
        let fares: Vec<Fare> = [30.0, 10.0, 20.0]
            .into_iter()
            .map(|v| Fare::new(v).unwrap())
            .collect();
        let total: Fare = fares.iter().copied().sum();
        assert_eq!(total.value(), 60.0);
        assert_eq!(fares.iter().min().map(|f| f.value()), Some(10.0));
    }

    #[test]
    fn error_display() {
        let err = Fare::new(-5.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid fare -5: must not be negative");
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Fare::new(150.0).unwrap().to_string(), "150.00");
    }

    #[test]
    fn serde_rejects_negative() {
        assert!(serde_json::from_str::<Fare>("12.5").is_ok());
        assert!(serde_json::from_str::<Fare>("-3").is_err());
    }
}
