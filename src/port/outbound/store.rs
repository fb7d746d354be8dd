//! Daily snapshot persistence port.

use std::future::Future;

use crate::domain::{DailySnapshot, MarketRecord};
use crate::error::Result;

/// Storage keyed by UTC calendar day: at most one snapshot exists per day.
pub trait SnapshotStore: Send + Sync {
    /// Get the snapshot for the current UTC day, if one was persisted.
    fn today(&self) -> impl Future<Output = Result<Option<DailySnapshot>>> + Send;

    /// Persist today's market records, inserting the day's first snapshot
    /// or overwriting the existing one in place (`created_at` preserved).
    fn save_today(
        &self,
        records: &[MarketRecord],
    ) -> impl Future<Output = Result<()>> + Send;
}
