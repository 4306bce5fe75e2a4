//! Fixed column schema of the Seattle weather dataset.

use std::fmt;

/// Kind of value a column is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Calendar date.
    Date,
    /// Floating point measurement.
    Numeric,
    /// Categorical text label.
    Label,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Date => "date",
            ColumnKind::Numeric => "number",
            ColumnKind::Label => "label",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required column of the source table.
///
/// Declaration order is the canonical column order used for validation
/// messages and for the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeatherColumn {
    Date,
    Precipitation,
    TempMax,
    TempMin,
    Wind,
    Weather,
}

impl WeatherColumn {
    /// All required columns in canonical order.
    pub const ALL: [WeatherColumn; 6] = [
        WeatherColumn::Date,
        WeatherColumn::Precipitation,
        WeatherColumn::TempMax,
        WeatherColumn::TempMin,
        WeatherColumn::Wind,
        WeatherColumn::Weather,
    ];

    /// Header name as it appears in the CSV file.
    pub fn name(self) -> &'static str {
        match self {
            WeatherColumn::Date => "date",
            WeatherColumn::Precipitation => "precipitation",
            WeatherColumn::TempMax => "temp_max",
            WeatherColumn::TempMin => "temp_min",
            WeatherColumn::Wind => "wind",
            WeatherColumn::Weather => "weather",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            WeatherColumn::Date => ColumnKind::Date,
            WeatherColumn::Weather => ColumnKind::Label,
            _ => ColumnKind::Numeric,
        }
    }

    /// Looks up a column by its exact header name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.name() == name)
    }
}

impl fmt::Display for WeatherColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The numeric measurement columns, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measurement {
    Precipitation,
    TempMax,
    TempMin,
    Wind,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::Precipitation,
        Measurement::TempMax,
        Measurement::TempMin,
        Measurement::Wind,
    ];

    pub fn column(self) -> WeatherColumn {
        match self {
            Measurement::Precipitation => WeatherColumn::Precipitation,
            Measurement::TempMax => WeatherColumn::TempMax,
            Measurement::TempMin => WeatherColumn::TempMin,
            Measurement::Wind => WeatherColumn::Wind,
        }
    }

    pub fn name(self) -> &'static str {
        self.column().name()
    }

    /// Header of the derived standardized column.
    pub fn scaled_name(self) -> &'static str {
        match self {
            Measurement::Precipitation => "precipitation_scaled",
            Measurement::TempMax => "temp_max_scaled",
            Measurement::TempMin => "temp_min_scaled",
            Measurement::Wind => "wind_scaled",
        }
    }

    /// Position in `Measurement::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
