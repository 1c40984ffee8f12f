//! Flight record sources.
//!
//! The planner needs nothing more than a list of flights; where they come
//! from is up to the caller. A `Vec<Flight>` is itself a source, and
//! [`JsonFlightFile`] reads a JSON array from disk.

mod error;
mod json;

pub use error::SourceError;
pub use json::JsonFlightFile;

use crate::domain::Flight;

/// Something that can supply flight records.
///
/// This abstraction allows the planner to be built from files in
/// production and from literal lists in tests.
pub trait FlightSource {
    /// Load every flight record.
    fn flights(&self) -> Result<Vec<Flight>, SourceError>;
}

impl FlightSource for Vec<Flight> {
    fn flights(&self) -> Result<Vec<Flight>, SourceError> {
        Ok(self.clone())
    }
}

impl FlightSource for [Flight] {
    fn flights(&self) -> Result<Vec<Flight>, SourceError> {
        Ok(self.to_vec())
    }
}
