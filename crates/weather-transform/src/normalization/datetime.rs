//! Calendar date parsing for the observation date column.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-2012
    "%d-%B-%Y",  // 15-January-2012
    "%m/%d/%Y",  // US: 01/15/2012
    "%d.%m.%Y",  // 15.01.2012
    "%b %d, %Y", // Jan 15, 2012
    "%d %b %Y",  // 15 Jan 2012
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a date string into a calendar date.
///
/// ISO 8601 (`YYYY-MM-DD`) is tried first, then common alternate layouts.
/// Datetime values keep only their date part. Returns None for anything
/// else, including partial dates such as `2012-01`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(datetime.date());
        }
    }

    None
}
