//! Time-bounded cache in front of the sync pipeline.
//!
//! Keyed by `(region, count)`, one instance per process, constructed by the
//! composition root and injected into whoever needs it. The TTL is measured
//! from insertion time, never refreshed on access. Entries are evicted
//! lazily on `get` and eagerly by the periodic [`PriceCache::clear_expired`]
//! sweep. The cache is a volatile view over the daily store, never the
//! system of record; dropping it at any time is safe.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::domain::MarketRecord;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    region: String,
    count: u32,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Vec<MarketRecord>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }
}

/// Cache size and key listing for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

/// Mutex-guarded TTL cache of market-grouped sync results.
///
/// Every operation completes without yielding; the lock is never held
/// across an await point.
pub struct PriceCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    ttl: Duration,
}

impl PriceCache {
    /// Create a cache with the given time-to-live.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Get the cached payload for `(region, count)`.
    ///
    /// An expired entry is removed as a side effect and reported as a miss.
    #[must_use]
    pub fn get(&self, region: &str, count: u32) -> Option<Vec<MarketRecord>> {
        let key = CacheKey {
            region: region.to_string(),
            count,
        };
        let mut entries = self.entries.lock();
        match entries.get(&key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                entries.remove(&key);
                None
            }
            Some(entry) => Some(entry.payload.clone()),
            None => None,
        }
    }

    /// Insert or replace the payload for `(region, count)`.
    pub fn set(&self, region: &str, count: u32, payload: Vec<MarketRecord>) {
        let key = CacheKey {
            region: region.to_string(),
            count,
        };
        self.entries.lock().insert(
            key,
            CacheEntry {
                payload,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Eagerly drop expired entries across the whole store.
    ///
    /// Returns the number of entries removed. Intended to run on a periodic
    /// background sweep, independent of request traffic.
    pub fn clear_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl));
        before - entries.len()
    }

    /// Current size and keys, for logging and diagnostics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        let mut keys: Vec<String> = entries
            .keys()
            .map(|k| format!("{}:{}", k.region, k.count))
            .collect();
        keys.sort();
        CacheStats {
            size: entries.len(),
            keys,
        }
    }
}
