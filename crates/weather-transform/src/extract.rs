//! Conversion of DataFrame cells into raw records.

use polars::prelude::{Column, DataFrame, DataType};
use weather_model::{RawRecord, RawValue, WeatherColumn};

use crate::error::CleanError;
use crate::schema::ColumnLayout;

/// Reads the required columns of `data` into one [`RawRecord`] per row.
///
/// Columns that are already numeric yield [`RawValue::Number`];
/// every other column is read as trimmed text. Nulls and blank text are
/// [`RawValue::Missing`].
pub fn extract_raw_records(
    data: &DataFrame,
    layout: &ColumnLayout,
) -> Result<Vec<RawRecord>, CleanError> {
    let mut records: Vec<RawRecord> = (1..=data.height()).map(RawRecord::empty).collect();
    let columns = data.get_columns();

    for weather_column in WeatherColumn::ALL {
        let position = layout.position(weather_column);
        let column = columns.get(position).ok_or_else(|| CleanError::DataFrame {
            message: format!(
                "column '{}' expected at position {} but the table has {} columns",
                weather_column,
                position,
                columns.len()
            ),
        })?;
        let values = column_values(column)?;
        for (record, value) in records.iter_mut().zip(values) {
            *record.value_mut(weather_column) = value;
        }
    }

    Ok(records)
}

fn column_values(column: &Column) -> Result<Vec<RawValue>, CleanError> {
    match column.dtype() {
        DataType::Null => Ok(vec![RawValue::Missing; column.len()]),
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::UInt64
        | DataType::UInt32 => {
            let floats = column.cast(&DataType::Float64)?;
            Ok(floats
                .f64()?
                .into_iter()
                .map(|value| value.map_or(RawValue::Missing, RawValue::Number))
                .collect())
        }
        DataType::String => Ok(text_values(column)?),
        _ => {
            let text = column.cast(&DataType::String)?;
            Ok(text_values(&text)?)
        }
    }
}

fn text_values(column: &Column) -> Result<Vec<RawValue>, CleanError> {
    Ok(column.str()?.into_iter().map(RawValue::from_text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate_schema;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("column_1".into(), vec!["2012-01-01", " "]).into_column(),
            Series::new("column_2".into(), vec![Some(0.0), None]).into_column(),
            Series::new("column_3".into(), vec![12.8, 10.6]).into_column(),
            Series::new("column_4".into(), vec![5i64, 3]).into_column(),
            Series::new("column_5".into(), vec!["4.7", "gusty"]).into_column(),
            Series::new("column_6".into(), vec![Some("drizzle"), None]).into_column(),
        ])
        .unwrap()
    }

    fn layout() -> ColumnLayout {
        let headers: Vec<String> = WeatherColumn::ALL.iter().map(|c| c.name().to_string()).collect();
        validate_schema(&headers).unwrap()
    }

    #[test]
    fn test_values_follow_column_types() {
        let records = extract_raw_records(&frame(), &layout()).unwrap();

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.row, 1);
        assert_eq!(first.date, RawValue::Text("2012-01-01".to_string()));
        assert_eq!(first.precipitation, RawValue::Number(0.0));
        assert_eq!(first.temp_min, RawValue::Number(5.0));
        assert_eq!(first.wind, RawValue::Text("4.7".to_string()));
        assert_eq!(first.weather, RawValue::Text("drizzle".to_string()));
    }

    #[test]
    fn test_nulls_and_blanks_are_missing() {
        let records = extract_raw_records(&frame(), &layout()).unwrap();

        let second = &records[1];
        assert_eq!(second.row, 2);
        assert!(second.date.is_missing());
        assert!(second.precipitation.is_missing());
        assert!(second.weather.is_missing());
        assert_eq!(second.wind, RawValue::Text("gusty".to_string()));
    }
}
