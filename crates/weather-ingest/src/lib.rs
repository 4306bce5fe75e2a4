//! Weather data ingestion.
//!
//! Loads the raw observations CSV into a Polars `DataFrame` of text cells;
//! typing each column is left to the cleaning step. The header row is read
//! separately so that the names the file actually declares (including
//! duplicates, which Polars would rename) are available for schema
//! validation.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use weather_ingest::read_csv_table;
//!
//! let table = read_csv_table(Path::new("Weather_datasets_raw/seattle-weather.csv"))?;
//! println!("{} rows, columns: {:?}", table.data.height(), table.headers.columns);
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, CsvTable, MAX_CSV_FILE_SIZE, read_csv_schema, read_csv_table};
