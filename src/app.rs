//! App orchestration module.
//!
//! The composition root: builds the connection pool, the feed client, the
//! snapshot store, the region catalog, and the injected cache, then runs
//! sync passes until shutdown.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::adapter::outbound::bantay::BantayClient;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::SqliteSnapshotStore;
use crate::application::cache::PriceCache;
use crate::application::sync::SyncService;
use crate::config::Config;
use crate::domain::{PriceRequest, RegionCatalog};
use crate::error::Result;
use crate::port::outbound::{PriceFeed, SnapshotStore};

/// Commodity selector for a full-region sync; the per-category endpoint
/// always receives a category wire id instead.
const SYNC_COMMODITY: &str = "all";

/// Main application struct.
pub struct App;

impl App {
    /// Run the price sync service.
    ///
    /// With `once` set, performs a single cached sync pass and returns;
    /// otherwise loops on the configured interval until the process is
    /// shut down.
    pub async fn run(config: Config, once: bool) -> Result<()> {
        let pool = create_pool(&config.database.url)?;
        run_migrations(&pool)?;

        let feed = BantayClient::new(
            config.network.base_url.clone(),
            Duration::from_secs(config.network.request_timeout_secs),
        )?;
        let store = SqliteSnapshotStore::new(pool);

        let mut catalog = RegionCatalog::default();
        for (region, markets) in &config.regions {
            catalog.insert(region.clone(), markets.clone());
        }
        info!(regions = catalog.len(), "Region catalog loaded");

        let cache = Arc::new(PriceCache::new(Duration::from_secs(config.cache.ttl_secs)));
        let service = SyncService::new(
            feed,
            store,
            catalog,
            Duration::from_secs(config.network.sync_deadline_secs),
        );

        spawn_cache_sweep(
            cache.clone(),
            Duration::from_secs(config.cache.sweep_interval_secs),
        );

        let request =
            PriceRequest::try_new(SYNC_COMMODITY, config.sync.region.clone(), config.sync.count)?;

        if once {
            return run_pass(&service, &cache, &request).await;
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(config.sync.interval_secs));
        loop {
            ticker.tick().await;
            if let Err(e) = run_pass(&service, &cache, &request).await {
                error!(error = %e, "Sync pass failed");
            }
        }
    }
}

async fn run_pass<F: PriceFeed, S: SnapshotStore>(
    service: &SyncService<F, S>,
    cache: &PriceCache,
    request: &PriceRequest,
) -> Result<()> {
    let records = service.sync_cached(cache, request).await?;
    let commodities: usize = records.iter().map(|r| r.commodities().len()).sum();
    info!(
        region = %request.region(),
        markets = records.len(),
        commodities,
        "Price sync complete"
    );
    Ok(())
}

/// Spawn the periodic expired-entry sweep, independent of request traffic.
fn spawn_cache_sweep(cache: Arc<PriceCache>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // the first tick fires immediately; skip it
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = cache.clear_expired();
            if removed > 0 {
                debug!(removed, "Evicted expired cache entries");
            }
        }
    });
}
