//! Lexicographic search score.

use std::cmp::Ordering;
use std::ops::Add;

use super::Fare;

/// A `(hops, fare)` score ordered by hop count, then fare.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{Fare, HopsThenFare};
///
/// let direct = HopsThenFare::new(1, Fare::new(500.0).unwrap());
/// let via = HopsThenFare::new(2, Fare::new(150.0).unwrap());
/// assert!(direct < via);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HopsThenFare {
    pub hops: usize,
    pub fare: Fare,
}

impl HopsThenFare {
    pub const ZERO: HopsThenFare = HopsThenFare {
        hops: 0,
        fare: Fare::ZERO,
    };

    pub fn new(hops: usize, fare: Fare) -> Self {
        Self { hops, fare }
    }

    /// Score after taking one more flight with the given fare.
    pub fn extend(self, fare: Fare) -> Self {
        self + HopsThenFare::new(1, fare)
    }
}

impl Add for HopsThenFare {
    type Output = HopsThenFare;

    fn add(self, rhs: HopsThenFare) -> HopsThenFare {
        HopsThenFare::new(self.hops + rhs.hops, self.fare + rhs.fare)
    }
}

impl PartialOrd for HopsThenFare {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HopsThenFare {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hops
            .cmp(&other.hops)
            .then_with(|| self.fare.cmp(&other.fare))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(hops: usize, fare: f64) -> HopsThenFare {
        HopsThenFare::new(hops, Fare::new(fare).unwrap())
    }

    #[test]
    fn hops_dominate() {
        assert!(score(1, 1000.0) < score(2, 1.0));
        assert!(score(3, 0.0) > score(2, 999.0));
    }

    #[test]
    fn fare_breaks_ties() {
        assert!(score(2, 100.0) < score(2, 100.5));
        assert_eq!(score(2, 100.0).cmp(&score(2, 100.0)), Ordering::Equal);
    }

    #[test]
    fn extend_adds_one_hop() {
        let next = HopsThenFare::ZERO.extend(Fare::new(40.0).unwrap());
        assert_eq!(next, score(1, 40.0));
        assert_eq!(next.extend(Fare::new(2.5).unwrap()), score(2, 42.5));
    }
}
