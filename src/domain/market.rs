//! Market-grouped price types.
//!
//! - [`MarketRecord`] - All commodities observed at one market
//! - [`CommodityEntry`] - A single commodity observation within a market
//!
//! Both serialize with serde; the daily store persists a full
//! `Vec<MarketRecord>` as one JSON document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::CommodityCategory;

/// One commodity observation inside a market record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommodityEntry {
    label: String,
    category: CommodityCategory,
    specification: String,
    price: Option<Decimal>,
}

impl CommodityEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        category: CommodityCategory,
        specification: impl Into<String>,
        price: Option<Decimal>,
    ) -> Self {
        Self {
            label: label.into(),
            category,
            specification: specification.into(),
            price,
        }
    }

    /// The commodity label as published upstream.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The category this entry was fetched under.
    #[must_use]
    pub const fn category(&self) -> CommodityCategory {
        self.category
    }

    /// The specification text accompanying the label.
    #[must_use]
    pub fn specification(&self) -> &str {
        &self.specification
    }

    /// The observed price, `None` when the upstream had none.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }
}

/// All commodities observed at one market during a sync pass.
///
/// `market_index` matches the market's position in the region's configured
/// market list; commodities keep the order they were appended in
/// (category fetch order, then row order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRecord {
    market_index: usize,
    market_name: String,
    commodities: Vec<CommodityEntry>,
}

impl MarketRecord {
    /// Create an empty record for a configured market.
    #[must_use]
    pub fn new(market_index: usize, market_name: impl Into<String>) -> Self {
        Self {
            market_index,
            market_name: market_name.into(),
            commodities: Vec::new(),
        }
    }

    /// Create a record with commodities already attached.
    #[must_use]
    pub fn with_commodities(
        market_index: usize,
        market_name: impl Into<String>,
        commodities: Vec<CommodityEntry>,
    ) -> Self {
        Self {
            market_index,
            market_name: market_name.into(),
            commodities,
        }
    }

    /// Position of this market in the region's configured list.
    #[must_use]
    pub const fn market_index(&self) -> usize {
        self.market_index
    }

    /// The configured market name.
    #[must_use]
    pub fn market_name(&self) -> &str {
        &self.market_name
    }

    /// The commodities observed at this market, in append order.
    #[must_use]
    pub fn commodities(&self) -> &[CommodityEntry] {
        &self.commodities
    }

    /// Append an observation to this market.
    pub fn push(&mut self, entry: CommodityEntry) {
        self.commodities.push(entry);
    }
}
