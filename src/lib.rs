//! Presyo - daily market price sync and caching pipeline.
//!
//! This crate syncs retail prices from the Bantay Presyo public price feed:
//! it fetches the HTML price table for each commodity category, parses the
//! uneven markup into typed rows, groups the rows by market against a
//! configured market list, and persists the result as one snapshot per UTC
//! calendar day. A TTL cache keyed by `(region, count)` sits in front of the
//! whole pipeline so repeated requests do not re-trigger the fetch.
//!
//! # Architecture
//!
//! Hexagonal layout: the application core talks to the outside world only
//! through ports.
//!
//! - **`port::outbound`** - `PriceFeed` (raw markup in) and `SnapshotStore`
//!   (daily persistence) trait boundaries
//! - **`application`** - extraction, market grouping, the TTL cache, and the
//!   sync orchestrator
//! - **`adapter::outbound`** - the reqwest feed client and the
//!   diesel/SQLite snapshot store
//! - **`app`** - the composition root wiring everything together
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with defaults and logging setup
//! - [`domain`] - Categories, requests, rows, market records, snapshots
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait boundaries
//! - [`application`] - Pipeline services
//! - [`adapter`] - Port implementations
//! - [`app`] - Application orchestration
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use presyo::application::PriceCache;
//!
//! let cache = PriceCache::new(Duration::from_secs(30 * 60));
//! assert_eq!(cache.stats().size, 0);
//! ```

pub mod adapter;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
