//! Region code to market list catalog.
//!
//! Market indices in upstream price tables are positional: column `i`
//! belongs to market `i` of a hand-maintained, ordered market list. The
//! list is configuration, never discovered from responses; the catalog
//! ships with the Central Visayas list and accepts more regions from
//! `config.toml`.

use std::collections::HashMap;

/// Region code for Central Visayas, the one region populated out of the box.
pub const REGION_CENTRAL_VISAYAS: &str = "070000000";

const CENTRAL_VISAYAS_MARKETS: [&str; 10] = [
    "TABUNOK PUBLIC MARKET",
    "MANDAUE CITY PUBLIC MARKET",
    "LAPU LAPU CITY PUBLIC MARKET",
    "LAZI PUBLIC MARKET",
    "DAO PUBLIC MARKET",
    "DUMAGUETE CITY PUBLIC MARKET",
    "CARBON PASIL MARKET",
    "LARENA PUBLIC MARKET",
    "SIQUIJOR PUBLIC MARKET",
    "PASIL PUBLIC MARKET",
];

/// Ordered market lists keyed by region code.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    markets: HashMap<String, Vec<String>>,
}

impl RegionCatalog {
    /// Create an empty catalog (no regions configured).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            markets: HashMap::new(),
        }
    }

    /// Add or replace a region's ordered market list.
    pub fn insert(&mut self, region: impl Into<String>, markets: Vec<String>) {
        self.markets.insert(region.into(), markets);
    }

    /// The ordered market list for a region, if configured.
    #[must_use]
    pub fn markets_for(&self, region: &str) -> Option<&[String]> {
        self.markets.get(region).map(Vec::as_slice)
    }

    /// Number of configured regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Returns true if no regions are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

impl Default for RegionCatalog {
    /// Catalog with the built-in Central Visayas market list.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(
            REGION_CENTRAL_VISAYAS,
            CENTRAL_VISAYAS_MARKETS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
        );
        catalog
    }
}
