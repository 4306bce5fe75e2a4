//! Table cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Validate**: locate every required column in the header
//! 2. **Extract**: read cells into raw records
//! 3. **Coerce**: parse dates, measurements and labels
//! 4. **De-duplicate**: drop exact duplicates before computing fill values
//! 5. **Resolve missing**: drop or fill per the missing value policy
//! 6. **De-duplicate**: drop rows that filling made identical
//! 7. **Derive**: label encoding and optional standardization
//!
//! Each stage takes the output of the previous stage. Nothing is written
//! here; a failing stage returns before any output exists.

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};
use weather_model::{CleanOptions, CleanRecord, CleanReport, ProcessedTable, TypedRecord};

use crate::coerce::coerce_records;
use crate::dedupe::drop_duplicates;
use crate::derive::derive_columns;
use crate::error::CleanError;
use crate::extract::extract_raw_records;
use crate::missing::resolve_missing;
use crate::schema::validate_schema;

/// Result of a successful cleaning run.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub table: ProcessedTable,
    pub report: CleanReport,
}

/// Cleans a loaded weather table with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct TableCleaner {
    options: CleanOptions,
}

impl TableCleaner {
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Runs every cleaning stage over `data`, whose columns are described
    /// positionally by `headers`.
    ///
    /// # Errors
    ///
    /// [`CleanError::Schema`] when a required column is missing, duplicated,
    /// or cannot be filled; [`CleanError::TypeCoercion`] on the first cell
    /// that cannot be parsed.
    pub fn clean(&self, headers: &[String], data: &DataFrame) -> Result<CleanOutcome, CleanError> {
        let span = info_span!(
            "clean",
            rows = data.height(),
            missing = self.options.missing.as_str(),
            standardize = self.options.standardize
        );
        let _guard = span.enter();

        let layout = validate_schema(headers)?;
        for column in &layout.ignored {
            warn!(column = %column, "ignoring column outside the weather schema");
        }

        let raw = extract_raw_records(data, &layout)?;
        let rows_read = raw.len();
        let typed = coerce_records(raw)?;
        debug!(rows = typed.len(), "coerced column types");

        let (typed, early_duplicates) = drop_duplicates(typed, TypedRecord::key);
        let (clean, missing) = resolve_missing(typed, self.options.missing)?;
        let (clean, late_duplicates) = drop_duplicates(clean, CleanRecord::key);
        let duplicates_removed = early_duplicates + late_duplicates;
        if duplicates_removed > 0 {
            debug!(duplicates_removed, "removed duplicate rows");
        }

        let table = derive_columns(clean, &self.options);
        let report = CleanReport {
            rows_read,
            duplicates_removed,
            rows_dropped: missing.rows_dropped,
            filled: missing.filled,
            rows_written: table.len(),
        };

        info!(
            rows_read = report.rows_read,
            rows_written = report.rows_written,
            duplicates_removed = report.duplicates_removed,
            rows_dropped = report.rows_dropped,
            cells_filled = report.cells_filled(),
            labels = table.label_mapping.len(),
            "cleaned weather table"
        );

        Ok(CleanOutcome { table, report })
    }
}
