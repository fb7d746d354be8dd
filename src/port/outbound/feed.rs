//! Upstream price feed port.

use std::future::Future;

use crate::domain::{CommodityCategory, PriceRequest};
use crate::error::Result;

/// Raw markup access to the upstream price service.
///
/// One outbound call per invocation, no internal retries; retry and
/// failure-isolation policy lives in the sync orchestrator. Responses are
/// opaque markup whose interpretation belongs to the extractor.
pub trait PriceFeed: Send + Sync {
    /// Fetch the market-name header listing for the request's region.
    fn market_header(
        &self,
        request: &PriceRequest,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Fetch the price table for one commodity category.
    fn price_table(
        &self,
        category: CommodityCategory,
        request: &PriceRequest,
    ) -> impl Future<Output = Result<String>> + Send;
}
