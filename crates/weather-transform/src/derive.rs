//! Derived columns: label encoding and standardization.

use tracing::debug;
use weather_model::{
    CleanOptions, CleanRecord, LabelMapping, Measurement, ProcessedRow, ProcessedTable,
};

/// Builds the label encoding of the weather column.
pub fn encode_labels(records: &[CleanRecord]) -> LabelMapping {
    LabelMapping::from_labels(records.iter().map(|record| record.weather.as_str()))
}

/// Z-score standardization of each measurement column.
///
/// Returns one `[f64; 4]` per record, indexed by [`Measurement::index`].
/// Uses the population standard deviation. A constant column maps to zeros.
pub fn standardize(records: &[CleanRecord]) -> Vec<[f64; 4]> {
    let mut scaled = vec![[0.0; 4]; records.len()];
    for measurement in Measurement::ALL {
        let values: Vec<f64> = records.iter().map(|r| r.measurement(measurement)).collect();
        let Some((mean, scale)) = column_scale(&values) else {
            continue;
        };
        debug!(column = %measurement, mean, scale, "standardizing column");
        for (row, value) in scaled.iter_mut().zip(&values) {
            row[measurement.index()] = (value - mean) / scale;
        }
    }
    scaled
}

/// Mean and scale of a column, or None when every value is the same.
fn column_scale(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    if values.iter().all(|value| *value == first) {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let scale = if std > 0.0 && std.is_finite() { std } else { 1.0 };
    Some((mean, scale))
}

/// Appends the derived columns to the cleaned records.
pub fn derive_columns(records: Vec<CleanRecord>, options: &CleanOptions) -> ProcessedTable {
    let label_mapping = encode_labels(&records);
    let scaled: Vec<Option<[f64; 4]>> = if options.standardize {
        standardize(&records).into_iter().map(Some).collect()
    } else {
        vec![None; records.len()]
    };

    let rows = records
        .into_iter()
        .zip(scaled)
        .map(|(record, scaled)| ProcessedRow {
            weather_code: label_mapping.code(&record.weather).unwrap_or_default(),
            record,
            scaled,
        })
        .collect();

    ProcessedTable {
        rows,
        label_mapping,
        standardized: options.standardize,
    }
}
