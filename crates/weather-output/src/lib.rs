//! Output writer for the cleaned weather table.
//!
//! Rendering is deterministic: the same [`ProcessedTable`] always produces the
//! same bytes. Files are written atomically, so a failed run never leaves a
//! partial output file behind.
//!
//! [`ProcessedTable`]: weather_model::ProcessedTable

mod error;
mod format;
mod writer;

pub use error::{OutputError, Result};
pub use format::{format_date, format_float};
pub use writer::{OUTPUT_FILE_NAME, output_path, render_csv, write_processed};
