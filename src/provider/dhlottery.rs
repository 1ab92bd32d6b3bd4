//! Official lottery site integration (dhlottery.co.kr).
//!
//! Two endpoints are used:
//!
//! - `common.do?method=getLottoNumber&drwNo=N`: JSON result of one draw.
//! - `gameResult.do?method=byWin`: HTML page whose first `<strong>N회</strong>`
//!   names the latest completed draw.
//!
//! The configured timeout bounds each public call. When a call needs both
//! endpoints, the two requests share that one deadline.

use std::time::{Duration, Instant};

use reqwest::blocking::{Client, RequestBuilder};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{DrawNumber, DrawRecord, DrawResult, MAX_BALL, MIN_BALL};
use crate::draw::schedule::parse_date;
use crate::error::{AppError, ProviderError};
use crate::provider::LotteryInfoProvider;

const LATEST_DRAW_PATTERN: &str = r"<strong>(\d+)회</strong>";

pub struct DhLotteryClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl DhLotteryClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Full published result of draw `n`.
    pub fn draw_result(&self, n: DrawNumber) -> Result<DrawResult, ProviderError> {
        self.fetch_draw_result(n, self.timeout)
    }

    /// Number of the most recently completed draw.
    pub fn latest_draw_number(&self) -> Result<DrawNumber, ProviderError> {
        self.fetch_latest_draw_number(self.timeout)
    }

    /// Full published result of the most recently completed draw.
    ///
    /// Both requests together stay within one configured timeout.
    pub fn latest_draw_result(&self) -> Result<DrawResult, ProviderError> {
        let deadline = Instant::now() + self.timeout;
        let n = self.fetch_latest_draw_number(self.timeout)?;
        let budget = remaining_budget(deadline, Instant::now())?;
        debug!(draw = n, remaining_ms = budget.as_millis() as u64, "latest draw found");
        self.fetch_draw_result(n, budget)
    }

    fn fetch_draw_result(&self, n: DrawNumber, budget: Duration) -> Result<DrawResult, ProviderError> {
        let url = format!("{}/common.do", self.base_url);
        let draw = n.to_string();
        debug!(draw = n, %url, "fetching draw result");
        let body = self.get_text(
            self.client
                .get(&url)
                .query(&[("method", "getLottoNumber"), ("drwNo", draw.as_str())])
                .timeout(budget),
        )?;
        decode_draw_result(n, &body)
    }

    fn fetch_latest_draw_number(&self, budget: Duration) -> Result<DrawNumber, ProviderError> {
        let url = format!("{}/gameResult.do", self.base_url);
        debug!(%url, "fetching latest draw page");
        let body = self.get_text(self.client.get(&url).query(&[("method", "byWin")]).timeout(budget))?;
        parse_latest_draw_number(&body)
    }

    fn get_text(&self, req: RequestBuilder) -> Result<String, ProviderError> {
        let resp = req.send().map_err(|e| {
            warn!(error = %e, "lottery request failed");
            ProviderError::Unavailable(format!("request failed: {e}"))
        })?;

        if !resp.status().is_success() {
            warn!(status = %resp.status(), "lottery request returned non-success status");
            return Err(ProviderError::Unavailable(format!(
                "request failed with status {}",
                resp.status()
            )));
        }

        resp.text()
            .map_err(|e| ProviderError::Unavailable(format!("failed to read response body: {e}")))
    }
}

impl LotteryInfoProvider for DhLotteryClient {
    fn draw_record(&self, n: DrawNumber) -> Result<DrawRecord, ProviderError> {
        self.draw_result(n).map(|r| r.record)
    }

    fn latest_draw_record(&self) -> Result<DrawRecord, ProviderError> {
        self.latest_draw_result().map(|r| r.record)
    }
}

/// Time left before `deadline`, or `Unavailable` once it has passed.
fn remaining_budget(deadline: Instant, now: Instant) -> Result<Duration, ProviderError> {
    deadline
        .checked_duration_since(now)
        .filter(|left| !left.is_zero())
        .ok_or_else(|| ProviderError::Unavailable("request deadline exceeded".to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LottoNumberResponse {
    return_value: String,
    drw_no: Option<u32>,
    drw_no_date: Option<String>,
    drwt_no1: Option<u8>,
    drwt_no2: Option<u8>,
    drwt_no3: Option<u8>,
    drwt_no4: Option<u8>,
    drwt_no5: Option<u8>,
    drwt_no6: Option<u8>,
    bnus_no: Option<u8>,
    #[serde(default)]
    first_winamnt: u64,
    #[serde(default)]
    first_przwner_co: u32,
    #[serde(default)]
    first_accumamnt: u64,
    #[serde(default)]
    tot_sellamnt: u64,
}

fn decode_draw_result(requested: DrawNumber, body: &str) -> Result<DrawResult, ProviderError> {
    let resp: LottoNumberResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Decode(format!("draw {requested}: {e}")))?;

    if resp.return_value != "success" {
        debug!(draw = requested, return_value = %resp.return_value, "draw not available");
        return Err(ProviderError::NotFound(requested));
    }

    let missing = |field: &str| ProviderError::Decode(format!("draw {requested}: missing {field}"));

    let draw_number = resp.drw_no.ok_or_else(|| missing("drwNo"))?;
    if draw_number != requested {
        return Err(ProviderError::Decode(format!(
            "asked for draw {requested}, got {draw_number}"
        )));
    }
    let raw_date = resp.drw_no_date.as_deref().ok_or_else(|| missing("drwNoDate"))?;
    let draw_date =
        parse_date(raw_date).map_err(|e| ProviderError::Decode(format!("draw {requested}: {e}")))?;

    let mut numbers = [
        resp.drwt_no1.ok_or_else(|| missing("drwtNo1"))?,
        resp.drwt_no2.ok_or_else(|| missing("drwtNo2"))?,
        resp.drwt_no3.ok_or_else(|| missing("drwtNo3"))?,
        resp.drwt_no4.ok_or_else(|| missing("drwtNo4"))?,
        resp.drwt_no5.ok_or_else(|| missing("drwtNo5"))?,
        resp.drwt_no6.ok_or_else(|| missing("drwtNo6"))?,
    ];
    numbers.sort_unstable();
    let bonus = resp.bnus_no.ok_or_else(|| missing("bnusNo"))?;

    if numbers.iter().chain([&bonus]).any(|b| !(MIN_BALL..=MAX_BALL).contains(b)) {
        return Err(ProviderError::Decode(format!(
            "draw {requested}: ball outside {MIN_BALL}..={MAX_BALL}"
        )));
    }

    Ok(DrawResult {
        record: DrawRecord {
            draw_number,
            draw_date,
        },
        numbers,
        bonus,
        first_prize_amount: resp.first_winamnt,
        first_prize_winners: resp.first_przwner_co,
        first_prize_total: resp.first_accumamnt,
        total_sales: resp.tot_sellamnt,
    })
}

fn parse_latest_draw_number(html: &str) -> Result<DrawNumber, ProviderError> {
    let re = Regex::new(LATEST_DRAW_PATTERN)
        .map_err(|e| ProviderError::Decode(format!("bad latest-draw pattern: {e}")))?;
    let caps = re
        .captures(html)
        .ok_or_else(|| ProviderError::Decode("latest draw number not found in page".to_string()))?;
    caps[1]
        .parse::<DrawNumber>()
        .map_err(|e| ProviderError::Decode(format!("invalid latest draw number '{}': {e}", &caps[1])))
}
