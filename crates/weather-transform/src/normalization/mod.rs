//! Cell-level parsing functions.
//!
//! Pure functions from text to typed values, shared by the coercion step.

pub mod datetime;
pub mod numeric;

pub use datetime::parse_date;
pub use numeric::parse_numeric;
