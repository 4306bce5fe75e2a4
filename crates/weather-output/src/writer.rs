//! CSV rendering and atomic file output.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use weather_model::{Measurement, ProcessedRow, ProcessedTable};

use crate::error::{OutputError, Result};
use crate::format::{format_date, format_float};

/// Name of the cleaned file inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "seattle_weather_processed.csv";

/// Path the cleaned file is written to for `output_dir`.
pub fn output_path(output_dir: &Path) -> PathBuf {
    output_dir.join(OUTPUT_FILE_NAME)
}

/// Renders the table as CSV bytes.
///
/// One header row, then one line per row in table order. Lines end with
/// `\n` and fields are quoted only when they contain a delimiter, quote or
/// line break.
pub fn render_csv(table: &ProcessedTable) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.column_names())?;
    for row in &table.rows {
        writer.write_record(render_row(row))?;
    }

    writer
        .into_inner()
        .map_err(|e| OutputError::Csv(csv::Error::from(e.into_error())))
}

fn render_row(row: &ProcessedRow) -> Vec<String> {
    let record = &row.record;
    let mut fields = Vec::with_capacity(11);
    fields.push(format_date(record.date));
    fields.extend(
        Measurement::ALL
            .iter()
            .map(|m| format_float(record.measurement(*m))),
    );
    fields.push(record.weather.clone());
    fields.push(row.weather_code.to_string());
    if let Some(scaled) = &row.scaled {
        fields.extend(scaled.iter().map(|value| format_float(*value)));
    }
    fields
}

/// Writes the table to [`OUTPUT_FILE_NAME`] inside `output_dir`.
///
/// The directory is created if needed. Bytes go to a temp file in the same
/// directory which is synced and then renamed over the target, so readers
/// see either the previous file or the complete new one.
pub fn write_processed(table: &ProcessedTable, output_dir: &Path) -> Result<PathBuf> {
    let bytes = render_csv(table)?;

    fs::create_dir_all(output_dir).map_err(|e| OutputError::Io {
        operation: "create directory",
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let path = output_path(output_dir);
    let temp_path = path.with_extension("csv.tmp");

    if let Err(err) = write_synced(&temp_path, &bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    if let Err(source) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path,
            source,
        });
    }

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        bytes = bytes.len(),
        "wrote processed table"
    );
    Ok(path)
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| OutputError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| OutputError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;
    use weather_model::{CleanRecord, LabelMapping};

    fn table() -> ProcessedTable {
        let record = CleanRecord {
            date: NaiveDate::from_ymd_opt(2012, 1, 1).unwrap(),
            precipitation: 0.0,
            temp_max: 12.8,
            temp_min: 5.0,
            wind: 4.7,
            weather: "drizzle".to_string(),
        };
        ProcessedTable {
            rows: vec![ProcessedRow {
                record,
                weather_code: 0,
                scaled: None,
            }],
            label_mapping: LabelMapping::from_labels(["drizzle"]),
            standardized: false,
        }
    }

    #[test]
    fn test_render_csv_single_row() {
        let bytes = render_csv(&table()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "date,precipitation,temp_max,temp_min,wind,weather,weather_code\n\
             2012-01-01,0.0,12.8,5.0,4.7,drizzle,0\n"
        );
    }

    #[test]
    fn test_render_csv_quotes_label_with_comma() {
        let mut table = table();
        table.rows[0].record.weather = "rain, heavy".to_string();
        let text = String::from_utf8(render_csv(&table).unwrap()).unwrap();
        assert!(text.ends_with("4.7,\"rain, heavy\",0\n"));
    }

    #[test]
    fn test_write_processed_creates_directory() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("out");

        let path = write_processed(&table(), &output_dir).unwrap();

        assert_eq!(path, output_dir.join(OUTPUT_FILE_NAME));
        assert_eq!(fs::read(&path).unwrap(), render_csv(&table()).unwrap());
        assert!(!path.with_extension("csv.tmp").exists());
    }

    #[test]
    fn test_write_processed_replaces_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(output_path(dir.path()), "stale").unwrap();

        let path = write_processed(&table(), dir.path()).unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("date,"));
    }

    #[test]
    fn test_write_processed_rejects_file_as_directory() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_processed(&table(), &blocker).unwrap_err();

        assert!(matches!(err, OutputError::Io { operation: "create directory", .. }));
    }
}
