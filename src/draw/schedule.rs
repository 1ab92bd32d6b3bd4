//! Weekly draw schedule arithmetic.
//!
//! Deterministic, pure logic. No IO, no wall-clock.
//!
//! Draw 1 took place on Saturday 2002-12-07 and every later draw follows
//! exactly seven days after the previous one, so the mapping between draw
//! numbers and dates needs no lookup:
//!
//! `draw_date(n) = epoch + 7 * (n - 1) days`
//!
//! Tickets for draw `n` are sold from the Sunday after draw `n - 1` up to and
//! including draw `n`'s Saturday.

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::DrawNumber;
use crate::error::DrawError;

/// Canonical output format for dates.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

const DAYS_PER_DRAW: u64 = 7;

/// Date of draw number 1 (a Saturday).
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2002, 12, 7).expect("epoch is a valid calendar date")
}

/// Official draw date of draw `n`.
pub fn draw_date_from_number(n: DrawNumber) -> Result<NaiveDate, DrawError> {
    if n < 1 {
        return Err(DrawError::InvalidArgument(format!(
            "draw number must be >= 1, got {n}"
        )));
    }
    let offset = DAYS_PER_DRAW * u64::from(n - 1);
    epoch_date()
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| DrawError::Computation(format!("draw {n} is beyond the calendar range")))
}

/// Draw number of the most recent draw on or before `date`.
///
/// Returns `None` for dates before the epoch draw.
pub fn draw_number_from_date(date: NaiveDate) -> Option<DrawNumber> {
    let days = (date - epoch_date()).num_days();
    if days < 0 {
        return None;
    }
    DrawNumber::try_from(1 + days / DAYS_PER_DRAW as i64).ok()
}

/// Draw number whose purchase window contains `date`.
///
/// A Saturday purchase belongs to that same day's draw; any other day rolls
/// forward to the coming Saturday.
pub fn draw_number_from_purchase_date(date: NaiveDate) -> Option<DrawNumber> {
    let dow = u64::from(date.weekday().num_days_from_sunday());
    let saturday = date.checked_add_days(Days::new(6 - dow))?;
    draw_number_from_date(saturday)
}

/// Parse `YYYY-MM-DD` or `YYYY/MM/DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DrawError> {
    let normalized = raw.trim().replace('-', "/");
    NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .map_err(|e| DrawError::Parse(format!("invalid date '{}': {e}", raw.trim())))
}

/// Format a date as `YYYY/MM/DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse an OCR-read draw number, ignoring any non-digit decoration
/// (e.g. a trailing `회`).
pub fn parse_draw_number(raw: &str) -> Result<DrawNumber, DrawError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(DrawError::Parse(format!("no digits in draw number '{raw}'")));
    }
    let n = digits
        .parse::<DrawNumber>()
        .map_err(|e| DrawError::Parse(format!("invalid draw number '{raw}': {e}")))?;
    if n < 1 {
        return Err(DrawError::Parse(format!("draw number '{raw}' is below 1")));
    }
    Ok(n)
}
