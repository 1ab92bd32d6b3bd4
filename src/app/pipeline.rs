//! Shared ticket workflows behind the `validate` and `numbers` commands.
//!
//! The CLI handlers only decide how to print; fetching, reconciling, and
//! matching live here so they can be driven without a terminal.

use serde::Serialize;

use crate::cli::{NumbersArgs, ValidateArgs};
use crate::config::Config;
use crate::domain::{Combination, DrawRecord, DrawResult, MatchOutcome, ValidationReport};
use crate::draw::{Reconciler, parse_date};
use crate::error::AppError;
use crate::provider::{DhLotteryClient, StaticProvider};
use crate::ticket::{collect_combinations, match_combination};

/// Combinations read from one OCR dump, optionally scored against a draw.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutput {
    pub combinations: Vec<Combination>,
    pub result: Option<DrawResult>,
    pub outcomes: Option<Vec<MatchOutcome>>,
}

/// Reconcile ticket fields, against `--latest` if given, otherwise against
/// the lottery site.
pub fn validate_ticket(args: &ValidateArgs, config: &Config) -> Result<ValidationReport, AppError> {
    let draw_number = args.draw_number.as_deref();
    let issue_date = args.issue_date.as_deref();

    let report = match (args.latest, args.latest_date.as_deref()) {
        (Some(n), Some(raw_date)) => {
            let record = DrawRecord {
                draw_number: n,
                draw_date: parse_date(raw_date)?,
            };
            Reconciler::new(StaticProvider::new([record])).validate(draw_number, issue_date)
        }
        _ => {
            let client = DhLotteryClient::new(config)?;
            Reconciler::new(client).validate(draw_number, issue_date)
        }
    };

    if let Some(path) = &args.export {
        crate::io::write_report_json(path, &report)?;
    }

    Ok(report)
}

/// Extract combinations from an OCR dump and, with `--draw`, score them.
pub fn scan_numbers(args: &NumbersArgs, config: &Config) -> Result<ScanOutput, AppError> {
    let lines = crate::io::read_ocr_lines(&args.input)?;
    let combinations = collect_combinations(&lines);

    let Some(n) = args.draw else {
        return Ok(ScanOutput {
            combinations,
            result: None,
            outcomes: None,
        });
    };

    let result = DhLotteryClient::new(config)?.draw_result(n)?;
    Ok(score(combinations, result))
}

fn score(combinations: Vec<Combination>, result: DrawResult) -> ScanOutput {
    let outcomes = combinations
        .iter()
        .map(|c| match_combination(&c.numbers, &result))
        .collect();
    ScanOutput {
        combinations,
        result: Some(result),
        outcomes: Some(outcomes),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;

    use super::*;

    fn offline_args(draw_number: &str, issue_date: &str) -> ValidateArgs {
        ValidateArgs {
            draw_number: Some(draw_number.to_string()),
            issue_date: Some(issue_date.to_string()),
            latest: Some(1100),
            latest_date: Some("2024-01-06".to_string()),
            json: false,
            export: None,
        }
    }

    #[test]
    fn offline_validation_caps_draw_number() {
        let report = validate_ticket(&offline_args("9999", "2024/01/01"), &Config::default()).unwrap();
        assert!(!report.draw_number_valid);
        assert_eq!(report.corrected_draw_number, Some(1100));
        assert!(report.issue_date_valid);
    }

    #[test]
    fn offline_validation_caps_issue_date_and_exports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let mut args = offline_args("1050", "2025/06/01");
        args.export = Some(path.clone());

        let report = validate_ticket(&args, &Config::default()).unwrap();
        assert!(!report.issue_date_valid);
        assert_eq!(report.corrected_issue_date, NaiveDate::from_ymd_opt(2024, 1, 6));
        assert_eq!(crate::io::read_report_json(&path).unwrap(), report);
    }

    #[test]
    fn bad_latest_date_is_usage_error() {
        let mut args = offline_args("1050", "2024/01/01");
        args.latest_date = Some("yesterday".to_string());
        assert_eq!(validate_ticket(&args, &Config::default()).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn scan_without_draw_stays_offline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["A 06 10 17 21 32 38", "B 01 02 03 04 05 06", "제 1100 회"]"#).unwrap();
        let args = NumbersArgs {
            input: file.path().to_path_buf(),
            draw: None,
            json: false,
        };

        let out = scan_numbers(&args, &Config::default()).unwrap();
        assert_eq!(out.combinations.len(), 2);
        assert!(out.result.is_none());
        assert!(out.outcomes.is_none());
    }

    #[test]
    fn score_pairs_outcomes_with_combinations() {
        let result = DrawResult {
            record: DrawRecord {
                draw_number: 1100,
                draw_date: NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
            },
            numbers: [6, 10, 17, 21, 32, 38],
            bonus: 12,
            first_prize_amount: 0,
            first_prize_winners: 0,
            first_prize_total: 0,
            total_sales: 0,
        };
        let combos = collect_combinations(&[
            crate::domain::OcrLine::new("A 06 10 17 21 32 38", None),
            crate::domain::OcrLine::new("B 01 02 03 04 05 06", None),
        ]);

        let out = score(combos, result);
        let outcomes = out.outcomes.unwrap();
        assert_eq!(outcomes[0].rank, Some(1));
        assert_eq!(outcomes[1].rank, None);
    }
}
