//! Record types for each stage of the cleaning pipeline.
//!
//! A row moves through three shapes:
//!
//! - [`RawRecord`]: cell values as loaded, before any parsing
//! - [`TypedRecord`]: coerced values, any of which may still be missing
//! - [`CleanRecord`]: fully populated, correctly typed values

use chrono::NaiveDate;

use crate::schema::{Measurement, WeatherColumn};

/// One cell of the source table before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Empty cell or null.
    Missing,
    /// Value from a column that is already numeric.
    Number(f64),
    /// Value from a text column, trimmed.
    Text(String),
}

/// Cell texts that mean "no value" in any column, as written by common
/// dataframe and spreadsheet exports. Matched case-sensitively after trimming.
pub const MISSING_MARKERS: [&str; 14] = [
    "#N/A", "#NA", "-NaN", "-nan", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a",
    "nan", "null", "none",
];

impl RawValue {
    /// Builds a value from an optional text cell.
    ///
    /// Blank text and the [`MISSING_MARKERS`] are missing.
    pub fn from_text(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(text) if !text.is_empty() && !MISSING_MARKERS.contains(&text) => {
                RawValue::Text(text.to_string())
            }
            _ => RawValue::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }
}

/// One untyped row as read from the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub date: RawValue,
    pub precipitation: RawValue,
    pub temp_max: RawValue,
    pub temp_min: RawValue,
    pub wind: RawValue,
    pub weather: RawValue,
}

impl RawRecord {
    /// Creates a record with every cell missing.
    pub fn empty(row: usize) -> Self {
        Self {
            row,
            date: RawValue::Missing,
            precipitation: RawValue::Missing,
            temp_max: RawValue::Missing,
            temp_min: RawValue::Missing,
            wind: RawValue::Missing,
            weather: RawValue::Missing,
        }
    }

    pub fn value(&self, column: WeatherColumn) -> &RawValue {
        match column {
            WeatherColumn::Date => &self.date,
            WeatherColumn::Precipitation => &self.precipitation,
            WeatherColumn::TempMax => &self.temp_max,
            WeatherColumn::TempMin => &self.temp_min,
            WeatherColumn::Wind => &self.wind,
            WeatherColumn::Weather => &self.weather,
        }
    }

    pub fn value_mut(&mut self, column: WeatherColumn) -> &mut RawValue {
        match column {
            WeatherColumn::Date => &mut self.date,
            WeatherColumn::Precipitation => &mut self.precipitation,
            WeatherColumn::TempMax => &mut self.temp_max,
            WeatherColumn::TempMin => &mut self.temp_min,
            WeatherColumn::Wind => &mut self.wind,
            WeatherColumn::Weather => &mut self.weather,
        }
    }
}

/// A row after type coercion, before missing values are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedRecord {
    /// 1-based data row number in the source file.
    pub row: usize,
    pub date: Option<NaiveDate>,
    pub precipitation: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub wind: Option<f64>,
    pub weather: Option<String>,
}

impl TypedRecord {
    pub fn measurement(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::Precipitation => self.precipitation,
            Measurement::TempMax => self.temp_max,
            Measurement::TempMin => self.temp_min,
            Measurement::Wind => self.wind,
        }
    }

    pub fn measurement_mut(&mut self, measurement: Measurement) -> &mut Option<f64> {
        match measurement {
            Measurement::Precipitation => &mut self.precipitation,
            Measurement::TempMax => &mut self.temp_max,
            Measurement::TempMin => &mut self.temp_min,
            Measurement::Wind => &mut self.wind,
        }
    }

    /// True when the row has the fields no fill policy can supply.
    pub fn has_identity(&self) -> bool {
        self.date.is_some() && self.weather.is_some()
    }

    /// Names of the fields that are still missing, in canonical order.
    pub fn missing_columns(&self) -> Vec<WeatherColumn> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push(WeatherColumn::Date);
        }
        for measurement in Measurement::ALL {
            if self.measurement(measurement).is_none() {
                missing.push(measurement.column());
            }
        }
        if self.weather.is_none() {
            missing.push(WeatherColumn::Weather);
        }
        missing
    }

    /// Converts into a [`CleanRecord`] if every field is populated.
    pub fn into_clean(self) -> Option<CleanRecord> {
        Some(CleanRecord {
            date: self.date?,
            precipitation: self.precipitation?,
            temp_max: self.temp_max?,
            temp_min: self.temp_min?,
            wind: self.wind?,
            weather: self.weather?,
        })
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            date: self.date,
            measurements: Measurement::ALL.map(|m| self.measurement(m).map(float_key)),
            weather: self.weather.clone(),
        }
    }
}

/// One fully typed, validated row.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub date: NaiveDate,
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub wind: f64,
    pub weather: String,
}

impl CleanRecord {
    pub fn measurement(&self, measurement: Measurement) -> f64 {
        match measurement {
            Measurement::Precipitation => self.precipitation,
            Measurement::TempMax => self.temp_max,
            Measurement::TempMin => self.temp_min,
            Measurement::Wind => self.wind,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            date: Some(self.date),
            measurements: Measurement::ALL.map(|m| Some(float_key(self.measurement(m)))),
            weather: Some(self.weather.clone()),
        }
    }
}

/// Total-order equality key used to detect exact duplicate rows.
///
/// Floats compare by bit pattern with `-0.0` folded into `0.0`. Missing values
/// compare equal to each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    date: Option<NaiveDate>,
    measurements: [Option<u64>; 4],
    weather: Option<String>,
}

fn float_key(value: f64) -> u64 {
    if value == 0.0 { 0f64.to_bits() } else { value.to_bits() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(row: usize) -> TypedRecord {
        TypedRecord {
            row,
            date: NaiveDate::from_ymd_opt(2012, 1, 1),
            precipitation: Some(0.0),
            temp_max: Some(12.8),
            temp_min: Some(5.0),
            wind: Some(4.7),
            weather: Some("drizzle".to_string()),
        }
    }

    #[test]
    fn raw_value_from_blank_text_is_missing() {
        assert_eq!(RawValue::from_text(Some("   ")), RawValue::Missing);
        assert_eq!(RawValue::from_text(None), RawValue::Missing);
        assert_eq!(
            RawValue::from_text(Some(" rain ")),
            RawValue::Text("rain".to_string())
        );
    }

    #[test]
    fn raw_value_missing_markers_are_missing() {
        for marker in ["NA", " N/A ", "n/a", "null", "NULL", "NaN", "None"] {
            assert_eq!(RawValue::from_text(Some(marker)), RawValue::Missing, "{marker}");
        }
        assert_eq!(
            RawValue::from_text(Some("Nancy")),
            RawValue::Text("Nancy".to_string())
        );
        assert_eq!(RawValue::from_text(Some("na")), RawValue::Text("na".to_string()));
    }

    #[test]
    fn key_ignores_row_number() {
        assert_eq!(typed(1).key(), typed(7).key());
    }

    #[test]
    fn key_folds_negative_zero() {
        let mut negative = typed(1);
        negative.precipitation = Some(-0.0);
        assert_eq!(negative.key(), typed(2).key());
    }

    #[test]
    fn clean_and_typed_keys_agree() {
        let record = typed(3);
        let key = record.key();
        let clean = record.into_clean().unwrap();
        assert_eq!(clean.key(), key);
    }

    #[test]
    fn into_clean_requires_every_field() {
        let mut record = typed(1);
        record.wind = None;
        assert_eq!(record.missing_columns(), vec![WeatherColumn::Wind]);
        assert!(record.has_identity());
        assert!(record.into_clean().is_none());
    }
}
