//! City identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque city identifier.
///
/// Cities are compared by their exact string value; no normalisation is
/// applied. Lookups against the flight graph accept a plain `&str`.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::City;
///
/// let city = City::new("LHR");
/// assert_eq!(city.as_str(), "LHR");
/// assert_eq!(city, City::from("LHR"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for City {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for City {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for City {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.0)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
