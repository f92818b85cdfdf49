//! GTFS loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading or exporting GTFS tables.
///
/// Any of these surfaces to the caller as "data unavailable"; they are
/// raised once at load/reload time, never during fare resolution.
#[derive(Debug, thiserror::Error)]
pub enum GtfsError {
    /// A required GTFS file is missing from the data directory.
    #[error("GTFS file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A table could not be read or parsed at all.
    #[error("failed to read GTFS table: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error outside of CSV parsing (e.g. export directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_display() {
        let err = GtfsError::MissingFile {
            path: PathBuf::from("dataset/gtfs/stops.txt"),
        };
        assert_eq!(err.to_string(), "GTFS file not found: dataset/gtfs/stops.txt");
    }
}
