//! Validation and correction of OCR-read ticket fields.
//!
//! The only bound that can be checked cheaply is "nothing on a ticket can be
//! later than the latest completed draw". Values past that bound are capped
//! to it; values at or under it are accepted as-is. Corrections only ever move
//! a value down.
//!
//! [`reconcile`] is the pure decision procedure. [`Reconciler`] wraps it with
//! an injected [`LotteryInfoProvider`], degrading to a skipped report when the
//! provider cannot be reached.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{DrawNumber, DrawRecord, ValidationReport};
use crate::draw::check::{check_draw_number_against_draw_date, check_purchase_date_against_draw_number};
use crate::draw::schedule::{draw_number_from_purchase_date, format_date, parse_date, parse_draw_number};
use crate::provider::LotteryInfoProvider;

pub const SKIPPED_MESSAGE: &str = "no reference draw available; schedule validation skipped";

/// Check OCR-read draw number and issue date against the latest real draw.
pub fn reconcile(
    ocr_draw_number: Option<&str>,
    ocr_issue_date: Option<&str>,
    latest: Option<&DrawRecord>,
) -> ValidationReport {
    let mut report = ValidationReport::unchecked();

    let Some(latest) = latest else {
        debug!("no latest draw; skipping reconciliation");
        report.messages.push(SKIPPED_MESSAGE.to_string());
        return report;
    };

    if let Some(raw) = ocr_draw_number {
        match parse_draw_number(raw) {
            Err(e) => {
                report
                    .messages
                    .push(format!("draw number '{raw}' left unverified: {e}"));
            }
            Ok(n) if n > latest.draw_number => {
                info!(read = n, latest = latest.draw_number, "draw number past latest draw, capping");
                report.draw_number_valid = false;
                report.corrected_draw_number = Some(latest.draw_number);
                report.messages.push(format!(
                    "draw number {n} is after the latest draw {}; corrected to {}",
                    latest.draw_number, latest.draw_number
                ));
            }
            Ok(n) => {
                report.messages.push(format!(
                    "draw number {n} is within the latest draw {}",
                    latest.draw_number
                ));
            }
        }
    }

    if let Some(raw) = ocr_issue_date {
        let latest_date = format_date(latest.draw_date);
        match parse_date(raw) {
            Err(e) => {
                report
                    .messages
                    .push(format!("issue date '{raw}' left unverified: {e}"));
            }
            Ok(date) if date > latest.draw_date => {
                info!(read = %date, latest = %latest.draw_date, "issue date past latest draw, capping");
                report.issue_date_valid = false;
                report.corrected_issue_date = Some(latest.draw_date);
                report.messages.push(format!(
                    "issue date {} is after the latest draw date {latest_date}; corrected to {latest_date}",
                    format_date(date)
                ));
            }
            Ok(date) => {
                report.messages.push(format!(
                    "issue date {} is on or before the latest draw date {latest_date}",
                    format_date(date)
                ));
            }
        }
    }

    report
}

/// Provider-backed reconciliation.
pub struct Reconciler<P> {
    provider: P,
}

impl<P: LotteryInfoProvider> Reconciler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Reconcile against the provider's latest draw, then append advisory
    /// cross-checks. The cross-checks add messages only.
    pub fn validate(&self, ocr_draw_number: Option<&str>, ocr_issue_date: Option<&str>) -> ValidationReport {
        let latest = match self.provider.latest_draw_record() {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "latest draw unavailable, validation skipped");
                None
            }
        };

        let mut report = reconcile(ocr_draw_number, ocr_issue_date, latest.as_ref());
        if latest.is_none() {
            return report;
        }

        let draw_number = report
            .corrected_draw_number
            .or_else(|| ocr_draw_number.and_then(|raw| parse_draw_number(raw).ok()));
        let issue_date = report
            .corrected_issue_date
            .or_else(|| ocr_issue_date.and_then(|raw| parse_date(raw).ok()));

        if let Some(n) = draw_number {
            let message = self.check_against_official_date(n);
            report.messages.push(message);
        }
        if let (Some(n), Some(date)) = (draw_number, issue_date) {
            report.messages.extend(purchase_window_messages(date, n));
        }

        report
    }

    fn check_against_official_date(&self, n: DrawNumber) -> String {
        let record = match self.provider.draw_record(n) {
            Ok(record) => record,
            Err(e) => {
                warn!(draw = n, error = %e, "official draw date unavailable");
                return format!("official date for draw {n} unavailable: {e}");
            }
        };
        match check_draw_number_against_draw_date(n, record.draw_date) {
            Ok((_, msg)) => format!("draw {n} schedule vs official date: {msg}"),
            Err(e) => format!("draw {n} schedule check failed: {e}"),
        }
    }
}

fn purchase_window_messages(date: NaiveDate, n: DrawNumber) -> Vec<String> {
    let (ok, msg) = check_purchase_date_against_draw_number(date, n);
    let mut out = vec![format!("issue date {} vs draw {n}: {msg}", format_date(date))];
    if !ok {
        if let Some(suggested) = draw_number_from_purchase_date(date) {
            out.push(format!(
                "issue date {} suggests draw {suggested}",
                format_date(date)
            ));
        }
    }
    out
}
