//! Reporting utilities: human-readable output for reports, results, and
//! extracted combinations.

pub mod format;

pub use format::*;
