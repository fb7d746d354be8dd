//! Price request and raw price row types.
//!
//! - [`PriceRequest`] - Validated parameters for one sync pass
//! - [`RawCommodityRow`] - One parsed table row before market grouping
//! - [`PricePoint`] - A single per-market price observation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Smallest sample count the upstream accepts.
pub const MIN_SAMPLE_COUNT: u32 = 1;
/// Largest sample count the upstream accepts.
pub const MAX_SAMPLE_COUNT: u32 = 100;

/// Parameters for one price sync: which commodity view, which region
/// catalog, and how many historical samples the upstream should return.
///
/// Immutable once constructed; build a fresh one per sync call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    commodity: String,
    region: String,
    count: u32,
}

impl PriceRequest {
    /// Create a validated request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` when commodity or region is empty, or when
    /// `count` falls outside `[MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT]`.
    pub fn try_new(
        commodity: impl Into<String>,
        region: impl Into<String>,
        count: u32,
    ) -> Result<Self, DomainError> {
        let commodity = commodity.into();
        let region = region.into();

        if commodity.trim().is_empty() {
            return Err(DomainError::EmptyCommodity);
        }
        if region.trim().is_empty() {
            return Err(DomainError::EmptyRegion);
        }
        if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&count) {
            return Err(DomainError::CountOutOfRange { count });
        }

        Ok(Self {
            commodity,
            region,
            count,
        })
    }

    /// The commodity selector sent to the upstream header endpoint.
    #[must_use]
    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    /// The region catalog code (fixed-length numeric string).
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// How many historical samples the upstream should return.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

/// One price observation at a positional market index.
///
/// `price` is `None` when the upstream renders its "not available" sentinel
/// (or anything non-numeric) for that cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    market_index: usize,
    price: Option<Decimal>,
}

impl PricePoint {
    /// Create a price point.
    #[must_use]
    pub const fn new(market_index: usize, price: Option<Decimal>) -> Self {
        Self {
            market_index,
            price,
        }
    }

    /// Positional index into the region's configured market list.
    #[must_use]
    pub const fn market_index(&self) -> usize {
        self.market_index
    }

    /// The observed price, if the upstream published one.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }
}

/// One commodity row as extracted from an upstream price table.
///
/// The price vector is positional: index `i` belongs to market `i` of the
/// region's configured market list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommodityRow {
    label: String,
    specification: String,
    prices: Vec<PricePoint>,
}

impl RawCommodityRow {
    /// Create a row from extracted cell values.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        specification: impl Into<String>,
        prices: Vec<PricePoint>,
    ) -> Self {
        Self {
            label: label.into(),
            specification: specification.into(),
            prices,
        }
    }

    /// The commodity label (first table cell).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The specification text (second table cell).
    #[must_use]
    pub fn specification(&self) -> &str {
        &self.specification
    }

    /// Per-market price observations in positional order.
    #[must_use]
    pub fn prices(&self) -> &[PricePoint] {
        &self.prices
    }
}
