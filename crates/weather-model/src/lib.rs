//! Data model for the Seattle weather preprocessor.
//!
//! Holds the fixed column schema, the record types that flow through the
//! cleaning pipeline, the cleaning options and run report, and the two fatal
//! error kinds shared by every crate in the workspace.

pub mod error;
pub mod options;
pub mod record;
pub mod report;
pub mod schema;
pub mod table;

pub use error::{SchemaError, TypeCoercionError};
pub use options::{CleanOptions, MissingPolicy};
pub use record::{CleanRecord, RawRecord, RawValue, RecordKey, TypedRecord};
pub use report::{CleanReport, FillSummary};
pub use schema::{ColumnKind, Measurement, WeatherColumn};
pub use table::{LabelMapping, ProcessedRow, ProcessedTable, WEATHER_CODE_COLUMN};
