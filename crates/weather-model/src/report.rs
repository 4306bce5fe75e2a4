//! Counters collected while cleaning a table.

use std::collections::BTreeMap;

use crate::schema::Measurement;

/// Fill statistics for one measurement column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSummary {
    /// Number of cells that were filled.
    pub cells: usize,
    /// Value written into each filled cell.
    pub value: f64,
}

/// Summary of one cleaning run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanReport {
    /// Data rows read from the source file.
    pub rows_read: usize,
    /// Exact duplicate rows removed.
    pub duplicates_removed: usize,
    /// Rows dropped because a missing value could not be resolved.
    pub rows_dropped: usize,
    /// Columns that had cells filled, keyed in canonical order.
    pub filled: BTreeMap<Measurement, FillSummary>,
    /// Rows in the cleaned table.
    pub rows_written: usize,
}

impl CleanReport {
    /// Total number of filled cells across all columns.
    pub fn cells_filled(&self) -> usize {
        self.filled.values().map(|fill| fill.cells).sum()
    }
}
