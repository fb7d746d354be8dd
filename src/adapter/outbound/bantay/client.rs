//! HTTP client for the Bantay Presyo price feed.
//!
//! The feed takes form-encoded POSTs on two fixed endpoints, one returning
//! the market-name header for a region and one returning the price table
//! for a single commodity category, and answers with opaque HTML. No
//! authentication, no typed payloads, no retries here: failure handling is
//! the orchestrator's job.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::domain::{CommodityCategory, PriceRequest};
use crate::error::Result;
use crate::port::outbound::PriceFeed;

/// Default base URL of the public price feed.
pub const DEFAULT_BASE_URL: &str = "http://www.bantaypresyo.da.gov.ph";

const HEADER_ENDPOINT: &str = "tbl_price_get_comm_header.php";
const PRICE_ENDPOINT: &str = "tbl_price_get_comm_price.php";

/// Form-encoded HTTP client for the price feed.
pub struct BantayClient {
    client: Client,
    base_url: String,
}

impl BantayClient {
    /// Create a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: String, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { client, base_url })
    }

    async fn post_form(
        &self,
        endpoint: &str,
        commodity: &str,
        request: &PriceRequest,
    ) -> Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(url = %url, commodity, region = %request.region(), "Fetching price feed page");

        let count = request.count().to_string();
        let response = self
            .client
            .post(&url)
            .form(&[
                ("commodity", commodity),
                ("region", request.region()),
                ("count", count.as_str()),
            ])
            .send()
            .await?;

        Ok(response.error_for_status()?.text().await?)
    }
}

impl PriceFeed for BantayClient {
    async fn market_header(&self, request: &PriceRequest) -> Result<String> {
        self.post_form(HEADER_ENDPOINT, request.commodity(), request)
            .await
    }

    async fn price_table(
        &self,
        category: CommodityCategory,
        request: &PriceRequest,
    ) -> Result<String> {
        self.post_form(PRICE_ENDPOINT, &category.id().to_string(), request)
            .await
    }
}
