//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{CsvTable, MAX_CSV_FILE_SIZE, read_csv_schema, read_csv_table};
