//! Daily snapshot of market-grouped prices.

use chrono::{DateTime, NaiveDate, Utc};

use super::market::MarketRecord;

/// The full set of market records synced for one UTC calendar day.
///
/// The daily store holds at most one snapshot per day: the first successful
/// sync of the day creates it, a re-run overwrites it in place with
/// `created_at` preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySnapshot {
    snapshot_date: NaiveDate,
    market_records: Vec<MarketRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DailySnapshot {
    /// Create a snapshot.
    #[must_use]
    pub fn new(
        snapshot_date: NaiveDate,
        market_records: Vec<MarketRecord>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            snapshot_date,
            market_records,
            created_at,
            updated_at,
        }
    }

    /// The UTC calendar day this snapshot covers.
    #[must_use]
    pub const fn snapshot_date(&self) -> NaiveDate {
        self.snapshot_date
    }

    /// The market records, in market-list order.
    #[must_use]
    pub fn market_records(&self) -> &[MarketRecord] {
        &self.market_records
    }

    /// Consume the snapshot, yielding its market records.
    #[must_use]
    pub fn into_market_records(self) -> Vec<MarketRecord> {
        self.market_records
    }

    /// When the day's first sync wrote this snapshot.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the snapshot was last written.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
