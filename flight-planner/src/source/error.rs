//! Errors from loading flight records.

use std::path::PathBuf;

/// Error loading flights from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source was read but is not a valid list of flights
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
