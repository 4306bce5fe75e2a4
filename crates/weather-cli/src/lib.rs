//! Library components of the weather cleaning CLI.

pub mod logging;
