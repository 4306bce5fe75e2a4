//! Error type for the cleaning pipeline.

use thiserror::Error;
use weather_model::{SchemaError, TypeCoercionError};

/// Errors that abort a cleaning run.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Source table does not match the required schema.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A cell cannot be parsed into its column's type.
    #[error("type coercion error: {0}")]
    TypeCoercion(#[from] TypeCoercionError),

    /// Reading cells out of the DataFrame failed.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}
