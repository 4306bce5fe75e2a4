//! Error types for output writing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Errors that can occur while rendering or writing the output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error during a file operation.
    #[error("failed to {operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV encoding failed.
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Rename of the finished temp file failed.
    #[error("failed to move '{temp_path}' to '{target_path}': {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: io::Error,
    },
}
