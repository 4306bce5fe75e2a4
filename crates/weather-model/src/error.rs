//! Fatal error kinds of the cleaning pipeline.

use thiserror::Error;

use crate::schema::ColumnKind;

/// Structural mismatch between the source table and the required schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// One or more required columns are absent from the header.
    #[error("missing required column(s): {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A required column name appears more than once in the header.
    #[error("column '{column}' appears more than once in the header")]
    DuplicateColumn { column: String },

    /// A measurement column has no values to derive a fill statistic from.
    #[error("column '{column}' has no values to compute a fill value from")]
    NoValues { column: String },
}

/// A cell value that cannot be parsed into its column's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{value}' as a {expected} in column '{column}' (row {row})")]
pub struct TypeCoercionError {
    pub column: String,
    /// 1-based data row number.
    pub row: usize,
    pub value: String,
    pub expected: ColumnKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_name() {
        let err = SchemaError::MissingColumns {
            missing: vec!["temp_min".to_string(), "wind".to_string()],
        };
        assert_eq!(err.to_string(), "missing required column(s): temp_min, wind");
    }

    #[test]
    fn coercion_error_names_column_and_row() {
        let err = TypeCoercionError {
            column: "wind".to_string(),
            row: 4,
            value: "breezy".to_string(),
            expected: ColumnKind::Numeric,
        };
        assert_eq!(
            err.to_string(),
            "cannot parse 'breezy' as a number in column 'wind' (row 4)"
        );
    }
}
