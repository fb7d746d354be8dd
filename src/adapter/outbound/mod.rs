//! Outbound adapters: the Bantay Presyo HTTP client and SQLite persistence.

pub mod bantay;
pub mod sqlite;
