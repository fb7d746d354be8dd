//! SQLite persistence adapter.
//!
//! Implements the daily snapshot store using Diesel ORM over a pooled
//! SQLite connection.

pub mod database;
pub mod store;

pub use store::SqliteSnapshotStore;
