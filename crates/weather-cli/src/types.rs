use std::path::PathBuf;

use weather_model::{CleanReport, ProcessedTable};

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub table: ProcessedTable,
    pub report: CleanReport,
}
