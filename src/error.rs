use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds surfaced by loading and querying a name dataset.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The input source could not be opened or read at all.
    #[error("File opening error: {}", path.display())]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON input file was readable but not a valid record array.
    #[error("Invalid JSON records in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A query that needs at least one record ran over an empty dataset.
    #[error("{operation} requires a non-empty dataset")]
    EmptyDataset { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_unavailable_names_the_path() {
        let err = StatsError::IoUnavailable {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "File opening error: missing.csv");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_dataset_names_the_operation() {
        let err = StatsError::EmptyDataset {
            operation: "median count",
        };
        assert_eq!(err.to_string(), "median count requires a non-empty dataset");
    }
}
