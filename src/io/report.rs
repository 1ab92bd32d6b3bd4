//! Write/read validation reports as JSON.
//!
//! Dates are written as `YYYY/MM/DD`; see `domain::slash_date`.

use std::fs::File;
use std::path::Path;

use crate::domain::ValidationReport;
use crate::error::AppError;

/// Write a report as pretty JSON.
pub fn write_report_json(path: &Path, report: &ValidationReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;
    Ok(())
}

/// Read a report previously written by [`write_report_json`].
pub fn read_report_json(path: &Path) -> Result<ValidationReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open report JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid report JSON: {e}")))
}
