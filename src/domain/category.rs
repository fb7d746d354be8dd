//! Commodity categories recognized by the upstream price feed.
//!
//! The feed buckets its price tables into a fixed set of top-level
//! categories, each addressed by a numeric wire id in the form-encoded
//! request. The set and the ids are stable service facts, not discovered
//! at runtime.

use serde::{Deserialize, Serialize};

/// One of the fixed commodity categories published by the price feed.
///
/// The enumeration order is the fetch order used by the sync pipeline, so
/// it also determines the order commodities appear within a market record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommodityCategory {
    Rice,
    Fish,
    Fruits,
    HighlandVegetables,
    LowlandVegetables,
    Meat,
    Spices,
    OtherCommodities,
}

impl CommodityCategory {
    /// Every category, in fetch order.
    pub const ALL: [CommodityCategory; 8] = [
        CommodityCategory::Rice,
        CommodityCategory::Fish,
        CommodityCategory::Fruits,
        CommodityCategory::HighlandVegetables,
        CommodityCategory::LowlandVegetables,
        CommodityCategory::Meat,
        CommodityCategory::Spices,
        CommodityCategory::OtherCommodities,
    ];

    /// The numeric id the upstream expects in the `commodity` form field.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            CommodityCategory::Rice => 1,
            CommodityCategory::Fish => 4,
            CommodityCategory::Fruits => 5,
            CommodityCategory::HighlandVegetables => 6,
            CommodityCategory::LowlandVegetables => 7,
            CommodityCategory::Meat => 8,
            CommodityCategory::Spices => 9,
            CommodityCategory::OtherCommodities => 10,
        }
    }

    /// Look up a category by its upstream wire id.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(CommodityCategory::Rice),
            4 => Some(CommodityCategory::Fish),
            5 => Some(CommodityCategory::Fruits),
            6 => Some(CommodityCategory::HighlandVegetables),
            7 => Some(CommodityCategory::LowlandVegetables),
            8 => Some(CommodityCategory::Meat),
            9 => Some(CommodityCategory::Spices),
            10 => Some(CommodityCategory::OtherCommodities),
            _ => None,
        }
    }

    /// Human-readable category name as the upstream displays it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CommodityCategory::Rice => "Rice",
            CommodityCategory::Fish => "Fish",
            CommodityCategory::Fruits => "Fruits",
            CommodityCategory::HighlandVegetables => "High Land Vegetables",
            CommodityCategory::LowlandVegetables => "Low Land Vegetables",
            CommodityCategory::Meat => "Meat",
            CommodityCategory::Spices => "Spices",
            CommodityCategory::OtherCommodities => "Other commodities",
        }
    }
}
