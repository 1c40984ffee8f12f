//! JSON file flight source.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{FlightSource, SourceError};
use crate::domain::Flight;

/// A JSON file holding an array of flight objects.
///
/// Each object has the fields `start_city`, `end_city`, `departure_time`,
/// `arrival_time` and `fare`:
///
/// ```json
/// [
///   {"start_city": "A", "end_city": "B", "departure_time": 10, "arrival_time": 20, "fare": 100}
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFlightFile {
    path: PathBuf,
}

impl JsonFlightFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlightSource for JsonFlightFile {
    fn flights(&self) -> Result<Vec<Flight>, SourceError> {
        let bytes = fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let flights: Vec<Flight> =
            serde_json::from_slice(&bytes).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            flights = flights.len(),
            "Loaded flight records"
        );

        Ok(flights)
    }
}
