//! Outbound ports: the upstream price feed and the daily snapshot store.

pub mod feed;
pub mod store;

pub use feed::PriceFeed;
pub use store::SnapshotStore;
