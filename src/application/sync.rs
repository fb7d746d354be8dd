//! The sync orchestrator: the pipeline's use-case entry point.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::application::cache::PriceCache;
use crate::application::extract::{parse_market_names, parse_price_rows};
use crate::application::grouper::group_by_market;
use crate::domain::{
    CommodityCategory, MarketRecord, PriceRequest, RawCommodityRow, RegionCatalog,
};
use crate::error::{Result, SyncError};
use crate::port::outbound::{PriceFeed, SnapshotStore};

/// Drives the full fetch → extract → group → persist pipeline.
///
/// Generic over the feed and store ports so tests can substitute fakes.
/// A sync pass is skipped entirely when the daily store already holds a
/// snapshot for the current UTC day.
pub struct SyncService<F, S> {
    feed: F,
    store: S,
    catalog: RegionCatalog,
    deadline: Duration,
}

impl<F: PriceFeed, S: SnapshotStore> SyncService<F, S> {
    /// Create a service over the given ports and region catalog.
    ///
    /// `deadline` bounds one whole multi-category sync pass; individual
    /// fetch timeouts are the feed adapter's concern.
    pub fn new(feed: F, store: S, catalog: RegionCatalog, deadline: Duration) -> Self {
        Self {
            feed,
            store,
            catalog,
            deadline,
        }
    }

    /// Run one sync, returning the day's market records.
    ///
    /// # Errors
    ///
    /// Returns a stage-tagged [`SyncError`] for unsupported regions, market
    /// list failures, persistence failures, and deadline overruns.
    /// Per-category fetch or parse failures are logged and skipped; a
    /// single unreachable category never fails the pass.
    pub async fn sync(&self, request: &PriceRequest) -> Result<Vec<MarketRecord>> {
        if let Some(snapshot) = self
            .store
            .today()
            .await
            .map_err(|e| SyncError::Persistence {
                reason: e.to_string(),
            })?
        {
            debug!(date = %snapshot.snapshot_date(), "Serving today's stored snapshot");
            return Ok(snapshot.into_market_records());
        }

        let markets = self
            .catalog
            .markets_for(request.region())
            .ok_or_else(|| SyncError::UnsupportedRegion {
                region: request.region().to_string(),
            })?
            .to_vec();

        match timeout(self.deadline, self.sync_fresh(request, &markets)).await {
            Ok(result) => result,
            Err(_) => Err(SyncError::DeadlineExceeded {
                seconds: self.deadline.as_secs(),
            }
            .into()),
        }
    }

    async fn sync_fresh(
        &self,
        request: &PriceRequest,
        markets: &[String],
    ) -> Result<Vec<MarketRecord>> {
        // One header fetch per sync validates that the upstream still
        // renders market names; zero names means the page layout changed
        // and positional indexing cannot be trusted.
        let header = self
            .feed
            .market_header(request)
            .await
            .map_err(|e| SyncError::MarketList {
                region: request.region().to_string(),
                reason: e.to_string(),
            })?;
        let upstream = parse_market_names(&header).map_err(|e| SyncError::MarketList {
            region: request.region().to_string(),
            reason: e.to_string(),
        })?;
        if upstream.len() != markets.len() {
            warn!(
                configured = markets.len(),
                upstream = upstream.len(),
                "Upstream market count differs from configured list"
            );
        }

        let mut rows: Vec<(CommodityCategory, RawCommodityRow)> = Vec::new();
        for category in CommodityCategory::ALL {
            match self.feed.price_table(category, request).await {
                Ok(html) => {
                    let parsed = parse_price_rows(&html);
                    debug!(
                        category = category.label(),
                        rows = parsed.len(),
                        "Fetched price table"
                    );
                    rows.extend(parsed.into_iter().map(|row| (category, row)));
                }
                Err(e) => {
                    warn!(
                        category = category.label(),
                        error = %e,
                        "Category fetch failed, continuing with remaining categories"
                    );
                }
            }
        }
        if rows.is_empty() {
            warn!(region = %request.region(), "No usable price rows in any category");
        }

        let records = group_by_market(&rows, markets);

        self.store
            .save_today(&records)
            .await
            .map_err(|e| SyncError::Persistence {
                reason: e.to_string(),
            })?;
        info!(
            region = %request.region(),
            markets = records.len(),
            commodities = records.iter().map(|r| r.commodities().len()).sum::<usize>(),
            "Daily snapshot persisted"
        );

        Ok(records)
    }

    /// The cache-wrapped entry point callers should use.
    ///
    /// A hit short-circuits the whole pipeline; a miss runs [`Self::sync`]
    /// and repopulates the cache.
    pub async fn sync_cached(
        &self,
        cache: &PriceCache,
        request: &PriceRequest,
    ) -> Result<Vec<MarketRecord>> {
        if let Some(records) = cache.get(request.region(), request.count()) {
            debug!(region = %request.region(), count = request.count(), "Cache hit");
            return Ok(records);
        }

        let records = self.sync(request).await?;
        cache.set(request.region(), request.count(), records.clone());
        Ok(records)
    }
}
