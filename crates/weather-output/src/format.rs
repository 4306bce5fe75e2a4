//! Cell formatting.

use chrono::NaiveDate;

/// Formats a float with the shortest text that parses back to the same value.
///
/// Integral values keep one fractional digit (`5.0`, not `5`) so a column
/// never switches between integer and float notation. Negative zero is
/// written as `0.0`.
pub fn format_float(value: f64) -> String {
    // Adding positive zero folds -0.0 into 0.0.
    let value = value + 0.0;
    let text = format!("{value}");
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Formats a date as ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
