//! The cleaned table with its derived columns.

use crate::record::CleanRecord;
use crate::schema::{Measurement, WeatherColumn};

/// Header of the label-encoded weather column.
pub const WEATHER_CODE_COLUMN: &str = "weather_code";

/// Label encoding of the weather column.
///
/// Distinct labels are sorted by byte order and numbered from zero, so the
/// same set of labels always yields the same codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    labels: Vec<String>,
}

impl LabelMapping {
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut labels: Vec<String> = labels.into_iter().map(str::to_string).collect();
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    /// Code assigned to `label`, if it was seen.
    pub fn code(&self, label: &str) -> Option<u32> {
        self.labels
            .binary_search_by(|probe| probe.as_str().cmp(label))
            .ok()
            .and_then(|idx| u32::try_from(idx).ok())
    }

    /// Iterates `(label, code)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels
            .iter()
            .zip(0u32..)
            .map(|(label, code)| (label.as_str(), code))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One output row: a clean record and its derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRow {
    pub record: CleanRecord,
    pub weather_code: u32,
    /// Standardized measurements indexed by [`Measurement::index`].
    pub scaled: Option<[f64; 4]>,
}

/// The final table handed to the output writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedTable {
    pub rows: Vec<ProcessedRow>,
    pub label_mapping: LabelMapping,
    /// Whether the standardized columns are part of the table.
    pub standardized: bool,
}

impl ProcessedTable {
    /// Output header in column order.
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = WeatherColumn::ALL.iter().map(|c| c.name()).collect();
        names.push(WEATHER_CODE_COLUMN);
        if self.standardized {
            names.extend(Measurement::ALL.iter().map(|m| m.scaled_name()));
        }
        names
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_codes_follow_sorted_order() {
        let mapping = LabelMapping::from_labels(["sun", "rain", "drizzle", "rain", "snow", "fog"]);
        let pairs: Vec<(&str, u32)> = mapping.iter().collect();
        assert_eq!(
            pairs,
            vec![("drizzle", 0), ("fog", 1), ("rain", 2), ("snow", 3), ("sun", 4)]
        );
        assert_eq!(mapping.code("snow"), Some(3));
        assert_eq!(mapping.code("hail"), None);
    }

    #[test]
    fn column_names_append_scaled_columns() {
        let mut table = ProcessedTable::default();
        assert_eq!(table.column_names().len(), 7);
        assert_eq!(table.column_names()[6], WEATHER_CODE_COLUMN);

        table.standardized = true;
        let names = table.column_names();
        assert_eq!(names.len(), 11);
        assert_eq!(names[7], "precipitation_scaled");
        assert_eq!(names[10], "wind_scaled");
    }
}
