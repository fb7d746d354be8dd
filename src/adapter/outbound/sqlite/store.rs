//! SQLite daily snapshot store.
//!
//! One row per UTC calendar day, keyed by the day string. The primary key
//! makes "at most one snapshot per day" a database invariant rather than a
//! convention. The market records travel as a single JSON document.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::SnapshotRow;
use crate::adapter::outbound::sqlite::database::schema::daily_snapshots;
use crate::domain::{DailySnapshot, MarketRecord};
use crate::error::{Error, Result};
use crate::port::outbound::SnapshotStore;

/// SQLite-backed implementation of [`SnapshotStore`].
pub struct SqliteSnapshotStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteSnapshotStore {
    /// Create a store over the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn day_key() -> String {
        Utc::now().date_naive().to_string()
    }

    fn from_row(row: SnapshotRow) -> Result<DailySnapshot> {
        let market_records: Vec<MarketRecord> = serde_json::from_str(&row.market_records)?;
        let snapshot_date = NaiveDate::parse_from_str(&row.snapshot_date, "%Y-%m-%d")
            .map_err(|e| Error::Parse(e.to_string()))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&row.updated_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(DailySnapshot::new(
            snapshot_date,
            market_records,
            created_at,
            updated_at,
        ))
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    async fn today(&self) -> Result<Option<DailySnapshot>> {
        let date = Self::day_key();
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let row: Option<SnapshotRow> = daily_snapshots::table
            .find(&date)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    async fn save_today(&self, records: &[MarketRecord]) -> Result<()> {
        let date = Self::day_key();
        let payload = serde_json::to_string(records)?;
        let now = Utc::now().to_rfc3339();

        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        // The read-modify-write must be atomic per day: an immediate
        // transaction takes the write lock up front, so two concurrent
        // syncs serialize instead of both inserting.
        conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
            let existing: Option<SnapshotRow> = daily_snapshots::table
                .find(&date)
                .first(conn)
                .optional()?;

            match existing {
                Some(_) => {
                    diesel::update(daily_snapshots::table.find(&date))
                        .set((
                            daily_snapshots::market_records.eq(&payload),
                            daily_snapshots::updated_at.eq(&now),
                        ))
                        .execute(conn)?;
                }
                None => {
                    diesel::insert_into(daily_snapshots::table)
                        .values(SnapshotRow {
                            snapshot_date: date.clone(),
                            market_records: payload.clone(),
                            created_at: now.clone(),
                            updated_at: now.clone(),
                        })
                        .execute(conn)?;
                }
            }
            Ok(())
        })
        .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }
}
