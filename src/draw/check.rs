//! Cross-field consistency checks between draw numbers and dates.

use chrono::NaiveDate;

use crate::domain::DrawNumber;
use crate::draw::schedule::{draw_date_from_number, draw_number_from_purchase_date, format_date};
use crate::error::DrawError;

/// Does draw `n` fall on `given`?
///
/// Fails with [`DrawError::Computation`] when `n` has no schedule date.
pub fn check_draw_number_against_draw_date(
    n: DrawNumber,
    given: NaiveDate,
) -> Result<(bool, String), DrawError> {
    let expected = draw_date_from_number(n)
        .map_err(|e| DrawError::Computation(format!("cannot compute draw date for {n}: {e}")))?;

    if expected == given {
        Ok((true, "match".to_string()))
    } else {
        Ok((
            false,
            format!(
                "mismatch: expected {}, got {}",
                format_date(expected),
                format_date(given)
            ),
        ))
    }
}

/// Was a ticket bought on `purchase_date` eligible for draw `n`?
pub fn check_purchase_date_against_draw_number(
    purchase_date: NaiveDate,
    n: DrawNumber,
) -> (bool, String) {
    match draw_number_from_purchase_date(purchase_date) {
        Some(expected) if expected == n => (true, "match".to_string()),
        Some(expected) => (false, format!("mismatch: expected draw {expected}, got {n}")),
        None => (
            false,
            format!(
                "no draw for purchase date {} (before the first draw)",
                format_date(purchase_date)
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn draw_date_match_and_mismatch() {
        let (ok, msg) = check_draw_number_against_draw_date(2, ymd(2002, 12, 14)).unwrap();
        assert!(ok);
        assert_eq!(msg, "match");

        let (ok, msg) = check_draw_number_against_draw_date(2, ymd(2002, 12, 15)).unwrap();
        assert!(!ok);
        assert_eq!(msg, "mismatch: expected 2002/12/14, got 2002/12/15");
    }

    #[test]
    fn draw_date_check_rejects_draw_zero() {
        assert!(matches!(
            check_draw_number_against_draw_date(0, ymd(2002, 12, 7)),
            Err(DrawError::Computation(_))
        ));
    }

    #[test]
    fn purchase_date_checks() {
        assert_eq!(
            check_purchase_date_against_draw_number(ymd(2024, 1, 1), 1101),
            (true, "match".to_string())
        );

        let (ok, msg) = check_purchase_date_against_draw_number(ymd(2024, 1, 7), 1101);
        assert!(!ok);
        assert_eq!(msg, "mismatch: expected draw 1102, got 1101");

        let (ok, msg) = check_purchase_date_against_draw_number(ymd(2001, 1, 1), 1);
        assert!(!ok);
        assert!(msg.contains("before the first draw"), "{msg}");
    }
}
