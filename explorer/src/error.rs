//! Error types for loading the character tables

use std::path::PathBuf;

/// Errors raised while reading the input tables.
///
/// Absent cell values are never errors; they surface as `None` on the record.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// The data file does not exist
    #[error("data file not found: {}", .0.display())]
    DataFileMissing(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited text could not be parsed
    #[error("malformed table {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is missing from the header row
    #[error("{} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
