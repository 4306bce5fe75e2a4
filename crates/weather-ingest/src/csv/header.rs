//! CSV header parsing and normalization.

/// Column names declared by the header row, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names (trimmed, BOM removed).
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Normalizes a header value by trimming whitespace and any BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Parses a CSV line into fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => in_quotes = true,
            '"' => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(normalize_header(&current));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_duplicates() {
        let headers = CsvHeaders::new(
            ["wind", "date", "wind"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        assert_eq!(headers.len(), 3);
        assert!(!headers.is_empty());
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}date"), "date");
        assert_eq!(normalize_header("  temp_max \r"), "temp_max");
    }

    #[test]
    fn test_parse_csv_line_simple() {
        let result = parse_csv_line("date,precipitation,temp_max");
        assert_eq!(result, vec!["date", "precipitation", "temp_max"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"date\",\"weather, label\",wind");
        assert_eq!(result, vec!["date", "weather, label", "wind"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"say \"\"hi\"\"\",b");
        assert_eq!(result, vec!["say \"hi\"", "b"]);
    }
}
