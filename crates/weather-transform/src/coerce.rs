//! Type coercion from raw cells to typed values.

use chrono::NaiveDate;
use weather_model::{
    Measurement, RawRecord, RawValue, TypeCoercionError, TypedRecord, WeatherColumn,
};

use crate::normalization::{parse_date, parse_numeric};

/// Coerces every record, stopping at the first unparseable cell.
pub fn coerce_records(records: Vec<RawRecord>) -> Result<Vec<TypedRecord>, TypeCoercionError> {
    records.into_iter().map(coerce_record).collect()
}

/// Coerces one record.
///
/// Missing cells stay missing. `NaN` measurements count as missing; infinite
/// ones are rejected.
pub fn coerce_record(record: RawRecord) -> Result<TypedRecord, TypeCoercionError> {
    let row = record.row;
    let mut typed = TypedRecord {
        row,
        date: coerce_date(&record.date, row)?,
        precipitation: None,
        temp_max: None,
        temp_min: None,
        wind: None,
        weather: None,
    };
    for measurement in Measurement::ALL {
        let raw = record.value(measurement.column());
        *typed.measurement_mut(measurement) = coerce_measurement(raw, measurement, row)?;
    }
    typed.weather = coerce_label(record.weather);
    Ok(typed)
}

fn coerce_date(value: &RawValue, row: usize) -> Result<Option<NaiveDate>, TypeCoercionError> {
    match value {
        RawValue::Missing => Ok(None),
        RawValue::Text(text) => parse_date(text)
            .map(Some)
            .ok_or_else(|| coercion_error(WeatherColumn::Date, row, text)),
        RawValue::Number(number) => Err(coercion_error(
            WeatherColumn::Date,
            row,
            &number.to_string(),
        )),
    }
}

fn coerce_measurement(
    value: &RawValue,
    measurement: Measurement,
    row: usize,
) -> Result<Option<f64>, TypeCoercionError> {
    let (number, source) = match value {
        RawValue::Missing => return Ok(None),
        RawValue::Number(number) => (Some(*number), number.to_string()),
        RawValue::Text(text) => (parse_numeric(text), text.clone()),
    };
    match number {
        Some(number) if number.is_nan() => Ok(None),
        Some(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(coercion_error(measurement.column(), row, &source)),
    }
}

fn coerce_label(value: RawValue) -> Option<String> {
    match value {
        RawValue::Missing => None,
        RawValue::Text(text) => Some(text),
        RawValue::Number(number) => Some(number.to_string()),
    }
}

fn coercion_error(column: WeatherColumn, row: usize, value: &str) -> TypeCoercionError {
    TypeCoercionError {
        column: column.name().to_string(),
        row,
        value: value.to_string(),
        expected: column.kind(),
    }
}
