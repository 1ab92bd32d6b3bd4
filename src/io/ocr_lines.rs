//! Read OCR line dumps.
//!
//! Accepted shapes (a JSON array, entries may be mixed):
//!
//! ```json
//! ["A 01 02 03 04 05 06", {"text": "B 07 08 09 10 11 12", "confidence": 0.93}]
//! ```

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::domain::OcrLine;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLine {
    Text(String),
    Scored {
        text: String,
        #[serde(default)]
        confidence: Option<f32>,
    },
}

impl From<RawLine> for OcrLine {
    fn from(raw: RawLine) -> Self {
        match raw {
            RawLine::Text(text) => OcrLine::new(text, None),
            RawLine::Scored { text, confidence } => OcrLine::new(text, confidence),
        }
    }
}

/// Read an OCR line dump from a JSON file.
pub fn read_ocr_lines(path: &Path) -> Result<Vec<OcrLine>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open OCR lines '{}': {e}", path.display())))?;
    let raw: Vec<RawLine> = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid OCR lines JSON '{}': {e}", path.display())))?;
    Ok(raw.into_iter().map(OcrLine::from).collect())
}
