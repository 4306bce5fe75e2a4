//! Missing value resolution.

use std::collections::BTreeMap;

use tracing::debug;
use weather_model::{
    CleanRecord, FillSummary, Measurement, MissingPolicy, SchemaError, TypedRecord,
};

/// What missing value resolution did to the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissingOutcome {
    /// Rows removed because they could not be repaired.
    pub rows_dropped: usize,
    /// Per-column fill counts and values (fill policy only).
    pub filled: BTreeMap<Measurement, FillSummary>,
}

/// Resolves every missing value so each row becomes a [`CleanRecord`].
///
/// Rows without a date or weather label are always dropped. Under
/// [`MissingPolicy::FillMean`], missing measurements take the mean of their
/// column over the remaining rows; under [`MissingPolicy::Drop`], incomplete
/// rows are dropped.
///
/// Fails with [`SchemaError::NoValues`] when a column that needs filling has
/// no values to average.
pub fn resolve_missing(
    rows: Vec<TypedRecord>,
    policy: MissingPolicy,
) -> Result<(Vec<CleanRecord>, MissingOutcome), SchemaError> {
    let before = rows.len();
    let mut kept: Vec<TypedRecord> = rows
        .into_iter()
        .filter(|record| {
            let keep = record.has_identity();
            if !keep {
                debug!(row = record.row, "dropping row without date or weather label");
            }
            keep
        })
        .collect();

    let mut filled = BTreeMap::new();
    match policy {
        MissingPolicy::Drop => kept.retain(|record| {
            let missing = record.missing_columns();
            if !missing.is_empty() {
                debug!(row = record.row, ?missing, "dropping incomplete row");
            }
            missing.is_empty()
        }),
        MissingPolicy::FillMean => {
            for measurement in Measurement::ALL {
                if let Some(summary) = fill_with_mean(&mut kept, measurement)? {
                    filled.insert(measurement, summary);
                }
            }
        }
    }

    let clean: Vec<CleanRecord> = kept.into_iter().filter_map(TypedRecord::into_clean).collect();
    let outcome = MissingOutcome {
        rows_dropped: before - clean.len(),
        filled,
    };
    Ok((clean, outcome))
}

fn fill_with_mean(
    rows: &mut [TypedRecord],
    measurement: Measurement,
) -> Result<Option<FillSummary>, SchemaError> {
    let missing = rows
        .iter()
        .filter(|record| record.measurement(measurement).is_none())
        .count();
    if missing == 0 {
        return Ok(None);
    }

    let value = column_mean(rows, measurement).ok_or_else(|| SchemaError::NoValues {
        column: measurement.name().to_string(),
    })?;
    for record in rows.iter_mut() {
        let cell = record.measurement_mut(measurement);
        if cell.is_none() {
            *cell = Some(value);
        }
    }
    debug!(column = %measurement, cells = missing, value, "filled missing values with column mean");
    Ok(Some(FillSummary {
        cells: missing,
        value,
    }))
}

/// Mean of the present values, summed in row order.
fn column_mean(rows: &[TypedRecord], measurement: Measurement) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in rows.iter().filter_map(|record| record.measurement(measurement)) {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
