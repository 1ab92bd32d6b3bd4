//! Formatted terminal output.
//!
//! Kept in one place so the core stays free of presentation concerns.

use crate::domain::{Combination, DrawResult, MatchOutcome, ValidationReport};
use crate::draw::format_date;

/// Format a validation report.
pub fn format_report(report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str("=== lotto - ticket validation ===\n");
    out.push_str(&format!(
        "Draw number: {}",
        if report.draw_number_valid { "ok" } else { "INVALID" }
    ));
    if let Some(n) = report.corrected_draw_number {
        out.push_str(&format!(" -> corrected to {n}"));
    }
    out.push('\n');

    out.push_str(&format!(
        "Issue date : {}",
        if report.issue_date_valid { "ok" } else { "INVALID" }
    ));
    if let Some(d) = report.corrected_issue_date {
        out.push_str(&format!(" -> corrected to {}", format_date(d)));
    }
    out.push('\n');

    if !report.messages.is_empty() {
        out.push_str("\nNotes:\n");
        for msg in &report.messages {
            out.push_str(&format!("- {msg}\n"));
        }
    }

    out
}

/// Format a published draw result.
pub fn format_draw_result(result: &DrawResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Draw {} ({})\n",
        result.record.draw_number,
        format_date(result.record.draw_date)
    ));
    out.push_str(&format!("Numbers: {} + {:02}\n", fmt_balls(&result.numbers), result.bonus));
    out.push_str(&format!(
        "1st prize: {} KRW x {} winner(s) (pool {} KRW)\n",
        fmt_thousands(result.first_prize_amount),
        result.first_prize_winners,
        fmt_thousands(result.first_prize_total)
    ));
    out.push_str(&format!("Total sales: {} KRW\n", fmt_thousands(result.total_sales)));

    out
}

/// Format extracted combinations, with match outcomes when a result is known.
pub fn format_combinations(combos: &[Combination], outcomes: Option<&[MatchOutcome]>) -> String {
    if combos.is_empty() {
        return "No combinations found.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("Combinations: {}\n", combos.len()));
    for (i, combo) in combos.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {}  conf={:.2}",
            i + 1,
            fmt_balls(&combo.numbers),
            combo.confidence
        ));
        if let Some(outcome) = outcomes.and_then(|o| o.get(i)) {
            let rank = outcome
                .rank
                .map(|r| format!("rank {r}"))
                .unwrap_or_else(|| "no prize".to_string());
            out.push_str(&format!(
                "  hits={}{}  {rank}",
                outcome.matched.len(),
                if outcome.bonus_matched { "+bonus" } else { "" }
            ));
        }
        out.push('\n');
    }

    out
}

fn fmt_balls(balls: &[u8]) -> String {
    balls
        .iter()
        .map(|b| format!("{b:02}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fmt_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::DrawRecord;

    #[test]
    fn thousands_separators() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(1000), "1,000");
        assert_eq!(fmt_thousands(113_918_006_000), "113,918,006,000");
    }

    #[test]
    fn report_shows_corrections() {
        let report = ValidationReport {
            draw_number_valid: false,
            corrected_draw_number: Some(1100),
            messages: vec!["capped".to_string()],
            ..ValidationReport::unchecked()
        };
        let text = format_report(&report);
        assert!(text.contains("Draw number: INVALID -> corrected to 1100"), "{text}");
        assert!(text.contains("Issue date : ok\n"), "{text}");
        assert!(text.contains("- capped"), "{text}");
    }

    #[test]
    fn draw_result_lists_padded_balls() {
        let result = DrawResult {
            record: DrawRecord {
                draw_number: 1100,
                draw_date: NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
            },
            numbers: [6, 10, 17, 21, 32, 38],
            bonus: 12,
            first_prize_amount: 1_620_460_381,
            first_prize_winners: 17,
            first_prize_total: 27_547_826_477,
            total_sales: 113_918_006_000,
        };
        let text = format_draw_result(&result);
        assert!(text.starts_with("Draw 1100 (2023/12/30)\n"), "{text}");
        assert!(text.contains("Numbers: 06 10 17 21 32 38 + 12"), "{text}");
    }

    #[test]
    fn combinations_with_outcomes() {
        let combos = vec![Combination {
            numbers: [1, 2, 3, 4, 5, 6],
            confidence: 0.5,
            source_text: "A 1 2 3 4 5 6".to_string(),
        }];
        let outcomes = vec![MatchOutcome {
            matched: vec![1, 2, 3],
            bonus_matched: false,
            rank: Some(5),
        }];
        let text = format_combinations(&combos, Some(&outcomes));
        assert!(text.contains(" 1. 01 02 03 04 05 06  conf=0.50  hits=3  rank 5"), "{text}");
        assert_eq!(format_combinations(&[], None), "No combinations found.\n");
    }
}
