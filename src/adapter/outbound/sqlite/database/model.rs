//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::daily_snapshots;

/// Database row for one day's snapshot. Market records are stored as a
/// single JSON document; timestamps are RFC 3339 strings.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = daily_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotRow {
    pub snapshot_date: String,
    pub market_records: String,
    pub created_at: String,
    pub updated_at: String,
}
