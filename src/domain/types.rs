//! Shared domain types.
//!
//! These types are plain values, created per call and discarded afterwards.
//! The ones that cross the JSON boundary (`ValidationReport`, `DrawResult`,
//! `Combination`) are serializable so they can be exported or printed as JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sequential weekly draw number. Draw 1 is the epoch draw.
pub type DrawNumber = u32;

/// Lowest valid lottery ball.
pub const MIN_BALL: u8 = 1;
/// Highest valid lottery ball.
pub const MAX_BALL: u8 = 45;

/// Authoritative pairing of a draw number and its draw date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub draw_number: DrawNumber,
    pub draw_date: NaiveDate,
}

/// Full published result of a single draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub record: DrawRecord,
    /// Six main numbers, ascending.
    pub numbers: [u8; 6],
    pub bonus: u8,
    /// Prize paid to each first-prize winner (KRW).
    pub first_prize_amount: u64,
    pub first_prize_winners: u32,
    /// Total first-prize pool (KRW).
    pub first_prize_total: u64,
    /// Total ticket sales for the draw (KRW).
    pub total_sales: u64,
}

/// Outcome of reconciling OCR-read ticket fields against the draw schedule.
///
/// `*_valid = true` means "not disproved": a field that could not be parsed,
/// or could not be checked at all, stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub draw_number_valid: bool,
    pub issue_date_valid: bool,
    pub corrected_draw_number: Option<DrawNumber>,
    #[serde(with = "slash_date")]
    pub corrected_issue_date: Option<NaiveDate>,
    pub messages: Vec<String>,
}

impl ValidationReport {
    /// Report with both fields valid and nothing corrected.
    pub fn unchecked() -> Self {
        Self {
            draw_number_valid: true,
            issue_date_valid: true,
            corrected_draw_number: None,
            corrected_issue_date: None,
            messages: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.draw_number_valid && self.issue_date_valid
    }
}

/// One text line produced by an external OCR engine.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrLine {
    pub text: String,
    /// Engine confidence in `0.0..=1.0`, when the engine reports one.
    pub confidence: Option<f32>,
}

impl OcrLine {
    pub fn new(text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// A six-number combination read off a ticket line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub numbers: [u8; 6],
    pub confidence: f32,
    pub source_text: String,
}

/// How a combination fared against a draw result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Main numbers that were drawn, in ticket order.
    pub matched: Vec<u8>,
    pub bonus_matched: bool,
    /// Prize rank `1..=5`, or `None` for no prize.
    pub rank: Option<u8>,
}

/// Serde adapter that writes optional dates as `YYYY/MM/DD` and reads either
/// `YYYY/MM/DD` or `YYYY-MM-DD`.
pub mod slash_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::draw::schedule::{format_date, parse_date};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse_date(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
