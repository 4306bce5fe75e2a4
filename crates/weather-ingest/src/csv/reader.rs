//! CSV file reading with Polars.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, parse_csv_line};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows Polars inspects for type inference. Zero reads every cell as text,
/// leaving all parsing to the coercion step, where a bad cell anywhere in
/// the file is reported with its row.
const INFER_SCHEMA_ROWS: usize = 0;

/// A loaded source table.
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// File the table was read from.
    pub path: PathBuf,
    /// Header names exactly as declared (normalized, duplicates kept).
    pub headers: CsvHeaders,
    /// Cell data, one text column per declared column.
    ///
    /// Columns are in header order and are addressed by position; their
    /// names are the positional placeholders Polars assigns, since the
    /// declared names may contain duplicates.
    pub data: DataFrame,
}

/// Check file size before loading.
pub(crate) fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub(crate) fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub(crate) fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::from_io(path, e))?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads the first `n` lines of a file, stopping early at end of file.
fn read_first_lines(path: &Path, n: usize) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut lines = Vec::with_capacity(n);
    for line in BufReader::new(file).lines().take(n) {
        lines.push(line.map_err(|e| IngestError::from_io(path, e))?);
    }
    Ok(lines)
}

/// Reads the header row of a CSV file.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let lines = read_first_lines(path, 1)?;
    let Some(line) = lines.first().filter(|line| !line.trim().is_empty()) else {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    };

    let columns = parse_csv_line(line);
    if let Some(position) = columns.iter().position(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
            position: position + 1,
        });
    }
    Ok(CsvHeaders::new(columns))
}

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// The header row is parsed by [`read_csv_schema`] and skipped by Polars.
/// Every data cell is kept as text, so a file is never rejected here for a
/// value that does not match the rest of its column. Empty cells become
/// nulls or empty strings.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let headers = read_csv_schema(path)?;
    let has_data = read_first_lines(path, 2)?
        .get(1)
        .is_some_and(|line| !line.trim().is_empty());
    if !has_data {
        return Err(IngestError::NoDataRows {
            path: path.to_path_buf(),
        });
    }

    let data = CsvReadOptions::default()
        .with_has_header(false)
        .with_skip_rows(1)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if data.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header declares {} columns but {} were parsed",
                headers.len(),
                data.width()
            ),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = data.height(),
        columns = data.width(),
        "loaded source table"
    );
    for (name, column) in headers.columns.iter().zip(data.get_columns()) {
        tracing::trace!(column = %name, nulls = column.null_count(), "read column");
    }

    Ok(CsvTable {
        path: path.to_path_buf(),
        headers,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_schema_single_header() {
        let file = create_temp_csv("date,wind,weather\n2012-01-01,4.7,drizzle\n");
        let headers = read_csv_schema(file.path()).unwrap();

        assert_eq!(headers.columns, vec!["date", "wind", "weather"]);
    }

    #[test]
    fn test_read_csv_schema_with_bom_and_crlf() {
        let file = create_temp_csv("\u{feff}date,wind\r\n2012-01-01,4.7\r\n");
        let headers = read_csv_schema(file.path()).unwrap();

        assert_eq!(headers.columns, vec!["date", "wind"]);
    }

    #[test]
    fn test_read_csv_schema_blank_first_line() {
        let file = create_temp_csv("\n2012-01-01,4.7\n");
        let result = read_csv_schema(file.path());

        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }

    #[test]
    fn test_read_csv_schema_empty_column_name() {
        let file = create_temp_csv("date,,wind\n");
        let result = read_csv_schema(file.path());

        assert!(matches!(
            result,
            Err(IngestError::EmptyColumnName { position: 2, .. })
        ));
    }

    #[test]
    fn test_read_csv_table_header_only() {
        let file = create_temp_csv("date,wind\n");
        let result = read_csv_table(file.path());

        assert!(matches!(result, Err(IngestError::NoDataRows { .. })));
    }

    #[test]
    fn test_check_file_size_rejects_empty_and_large() {
        let empty = create_temp_csv("");
        assert!(matches!(
            check_file_size(empty.path()),
            Err(IngestError::EmptyCsv { .. })
        ));

        let file = create_temp_csv("date\n2012-01-01\n");
        assert!(matches!(
            check_file_size_with_limit(file.path(), 4),
            Err(IngestError::FileTooLarge { max_size: 4, .. })
        ));
        assert!(check_file_size(file.path()).is_ok());
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'd', 0]).unwrap();
        let result = validate_encoding(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_table_keeps_cells_as_text() {
        let file = create_temp_csv(
            "date,precipitation,weather\n2012-01-01,0.0,drizzle\n2012-01-02,10.9,rain\n",
        );
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.data.height(), 2);
        assert_eq!(table.data.width(), 3);
        let precipitation = table.data.get_columns()[1].str().unwrap();
        assert_eq!(precipitation.get(1), Some("10.9"));
    }
}
