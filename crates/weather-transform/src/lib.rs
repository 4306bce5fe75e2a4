//! Weather table cleaning.
//!
//! Turns the loaded source table into a cleaned, analysis-ready table by
//! applying a fixed sequence of pure steps:
//!
//! 1. **Schema validation**: every required column is declared exactly once
//! 2. **Extraction**: cells become [`RawRecord`](weather_model::RawRecord)s
//! 3. **Coercion**: dates, measurements and labels are parsed
//! 4. **De-duplication**: exact duplicates are removed, first occurrence wins
//! 5. **Missing values**: resolved per [`MissingPolicy`](weather_model::MissingPolicy)
//! 6. **Derivation**: label encoding and optional standardization
//!
//! # Example
//!
//! ```ignore
//! use weather_model::CleanOptions;
//! use weather_transform::TableCleaner;
//!
//! let cleaner = TableCleaner::new(CleanOptions::default());
//! let outcome = cleaner.clean(&table.headers.columns, &table.data)?;
//! println!("{} rows cleaned", outcome.report.rows_written);
//! ```

mod coerce;
mod dedupe;
mod derive;
mod error;
mod extract;
mod missing;
mod pipeline;
mod schema;

pub mod normalization;

pub use coerce::{coerce_record, coerce_records};
pub use dedupe::drop_duplicates;
pub use derive::{derive_columns, encode_labels, standardize};
pub use error::CleanError;
pub use extract::extract_raw_records;
pub use missing::{MissingOutcome, resolve_missing};
pub use pipeline::{CleanOutcome, TableCleaner};
pub use schema::{ColumnLayout, validate_schema};
