//! Bantay Presyo price feed adapter.

pub mod client;

pub use client::BantayClient;
