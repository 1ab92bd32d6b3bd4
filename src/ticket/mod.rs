//! Number combinations from OCR'd ticket text.
//!
//! OCR itself happens elsewhere; this module only interprets text lines.
//! A line is a combination when it carries at least six digit runs and at
//! least six of those are valid balls (`1..=45`). The first six valid balls,
//! in reading order, are the combination.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::domain::{Combination, DrawResult, MAX_BALL, MIN_BALL, MatchOutcome, OcrLine};

const NUMBER_PATTERN: &str = r"\d+";

/// Confidence assumed for lines the OCR engine did not score.
pub const DEFAULT_CONFIDENCE: f32 = 0.5;

/// First six valid balls on a line, or `None`.
pub fn extract_numbers(text: &str) -> Option<[u8; 6]> {
    let re = Regex::new(NUMBER_PATTERN).ok()?;
    let runs: Vec<&str> = re.find_iter(text).map(|m| m.as_str()).collect();
    if runs.len() < 6 {
        return None;
    }

    let balls: Vec<u8> = runs
        .iter()
        .filter_map(|run| run.parse::<u8>().ok())
        .filter(|b| (MIN_BALL..=MAX_BALL).contains(b))
        .take(6)
        .collect();

    balls.try_into().ok()
}

/// De-duplicate lines and pull a combination out of each one that has one.
///
/// Lines are compared trimmed and lowercased; the first occurrence wins and
/// blank lines are dropped.
pub fn collect_combinations(lines: &[OcrLine]) -> Vec<Combination> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for line in lines {
        let key = line.text.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        if let Some(numbers) = extract_numbers(&line.text) {
            out.push(Combination {
                numbers,
                confidence: line.confidence.unwrap_or(DEFAULT_CONFIDENCE),
                source_text: line.text.clone(),
            });
        }
    }

    debug!(lines = lines.len(), unique = seen.len(), combinations = out.len(), "collected combinations");
    out
}

/// Score a combination against a published result.
pub fn match_combination(numbers: &[u8; 6], result: &DrawResult) -> MatchOutcome {
    let matched: Vec<u8> = numbers
        .iter()
        .copied()
        .filter(|n| result.numbers.contains(n))
        .collect();
    let bonus_matched = numbers.contains(&result.bonus);

    let rank = match (matched.len(), bonus_matched) {
        (6, _) => Some(1),
        (5, true) => Some(2),
        (5, false) => Some(3),
        (4, _) => Some(4),
        (3, _) => Some(5),
        _ => None,
    };

    MatchOutcome {
        matched,
        bonus_matched,
        rank,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::DrawRecord;

    fn result_1100() -> DrawResult {
        DrawResult {
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
        }
    }

    #[test]
    fn extracts_first_six_valid_balls() {
        assert_eq!(extract_numbers("A 자동 06 10 17 21 32 38"), Some([6, 10, 17, 21, 32, 38]));
        // 99 and 0 are skipped, reading order is kept.
        assert_eq!(extract_numbers("B 45 99 1 0 2 3 4 5 6"), Some([45, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn rejects_lines_without_six_balls() {
        assert_eq!(extract_numbers("1 2 3 4 5"), None);
        assert_eq!(extract_numbers("2024/01/06 1100 99 77 66 55"), None);
        assert_eq!(extract_numbers("no digits here"), None);
    }

    #[test]
    fn collect_dedupes_and_defaults_confidence() {
        let lines = vec![
            OcrLine::new("A 01 02 03 04 05 06", Some(0.9)),
            OcrLine::new("  a 01 02 03 04 05 06 ", Some(0.4)),
            OcrLine::new("", None),
            OcrLine::new("제 1100 회", None),
            OcrLine::new("B 07 08 09 10 11 12", None),
        ];
        let combos = collect_combinations(&lines);
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0].numbers, [1, 2, 3, 4, 5, 6]);
        assert_eq!(combos[0].confidence, 0.9);
        assert_eq!(combos[1].confidence, DEFAULT_CONFIDENCE);
        assert_eq!(combos[1].source_text, "B 07 08 09 10 11 12");
    }

    #[test]
    fn prize_ranks() {
        let result = result_1100();
        assert_eq!(match_combination(&[6, 10, 17, 21, 32, 38], &result).rank, Some(1));
        assert_eq!(match_combination(&[6, 10, 17, 21, 32, 12], &result).rank, Some(2));
        assert_eq!(match_combination(&[6, 10, 17, 21, 32, 1], &result).rank, Some(3));
        assert_eq!(match_combination(&[6, 10, 17, 21, 1, 2], &result).rank, Some(4));
        assert_eq!(match_combination(&[6, 10, 17, 1, 2, 3], &result).rank, Some(5));

        let miss = match_combination(&[6, 10, 12, 1, 2, 3], &result);
        assert_eq!(miss.rank, None);
        assert_eq!(miss.matched, vec![6, 10]);
        assert!(miss.bonus_matched);
    }
}
