//! Provider boundary for authoritative draw data.
//!
//! [`LotteryInfoProvider`] is the only way the reconciliation core learns
//! about real draws. [`DhLotteryClient`] talks to the official site;
//! [`StaticProvider`] serves a fixed set of records (tests, offline runs).

use std::collections::BTreeMap;

use crate::domain::{DrawNumber, DrawRecord};
use crate::error::ProviderError;

pub mod dhlottery;

pub use dhlottery::DhLotteryClient;

/// Source of official draw dates.
pub trait LotteryInfoProvider {
    /// Official record for draw `n`.
    ///
    /// Fails with [`ProviderError::NotFound`] for draws that have not happened.
    fn draw_record(&self, n: DrawNumber) -> Result<DrawRecord, ProviderError>;

    /// Most recently completed draw as of the call.
    fn latest_draw_record(&self) -> Result<DrawRecord, ProviderError>;
}

impl<P: LotteryInfoProvider + ?Sized> LotteryInfoProvider for &P {
    fn draw_record(&self, n: DrawNumber) -> Result<DrawRecord, ProviderError> {
        (**self).draw_record(n)
    }

    fn latest_draw_record(&self) -> Result<DrawRecord, ProviderError> {
        (**self).latest_draw_record()
    }
}

/// In-memory provider over a fixed set of records.
///
/// The latest record is the one with the highest draw number. An empty
/// provider behaves like an unreachable upstream.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    records: BTreeMap<DrawNumber, DrawRecord>,
}

impl StaticProvider {
    pub fn new(records: impl IntoIterator<Item = DrawRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.draw_number, r)).collect(),
        }
    }

    /// Provider that always fails with [`ProviderError::Unavailable`].
    pub fn offline() -> Self {
        Self::default()
    }
}

impl LotteryInfoProvider for StaticProvider {
    fn draw_record(&self, n: DrawNumber) -> Result<DrawRecord, ProviderError> {
        if self.records.is_empty() {
            return Err(ProviderError::Unavailable("offline".to_string()));
        }
        self.records.get(&n).copied().ok_or(ProviderError::NotFound(n))
    }

    fn latest_draw_record(&self) -> Result<DrawRecord, ProviderError> {
        self.records
            .values()
            .next_back()
            .copied()
            .ok_or_else(|| ProviderError::Unavailable("offline".to_string()))
    }
}
