//! Input/output helpers.
//!
//! - OCR line dumps (`ocr_lines`)
//! - validation report JSON (`report`)

pub mod ocr_lines;
pub mod report;

pub use ocr_lines::*;
pub use report::*;
