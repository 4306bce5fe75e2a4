//! Required-column validation.

use weather_model::{SchemaError, WeatherColumn};

/// Where each required column sits in the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Source position of each column, indexed like `WeatherColumn::ALL`.
    positions: [usize; 6],
    /// Declared columns outside the weather schema, in file order.
    pub ignored: Vec<String>,
}

impl ColumnLayout {
    /// Source position of `column`.
    pub fn position(&self, column: WeatherColumn) -> usize {
        self.positions[column as usize]
    }
}

/// Checks that every required column is declared exactly once.
///
/// All missing columns are reported together, in canonical order.
pub fn validate_schema(headers: &[String]) -> Result<ColumnLayout, SchemaError> {
    let mut positions = [usize::MAX; 6];
    let mut ignored = Vec::new();

    for (position, name) in headers.iter().enumerate() {
        match WeatherColumn::from_name(name) {
            Some(column) => {
                let slot = &mut positions[column as usize];
                if *slot != usize::MAX {
                    return Err(SchemaError::DuplicateColumn {
                        column: name.clone(),
                    });
                }
                *slot = position;
            }
            None => ignored.push(name.clone()),
        }
    }

    let missing: Vec<String> = WeatherColumn::ALL
        .iter()
        .filter(|column| positions[**column as usize] == usize::MAX)
        .map(|column| column.name().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns { missing });
    }

    Ok(ColumnLayout { positions, ignored })
}
