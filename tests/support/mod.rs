#![allow(dead_code)]

//! Shared fixtures and fakes for integration tests.

use chrono::Utc;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use presyo::domain::{
    CommodityCategory, CommodityEntry, DailySnapshot, MarketRecord, PriceRequest,
};
use presyo::error::{Error, Result};
use presyo::port::outbound::{PriceFeed, SnapshotStore};
use rust_decimal_macros::dec;

/// Header markup listing the given market names after the two header cells.
pub fn market_header_html(markets: &[&str]) -> String {
    let mut cells = String::from("<th>COMMODITY</th><th>SPECIFICATIONS</th>");
    for market in markets {
        cells.push_str(&format!("<th>{market}</th>"));
    }
    format!("<table><tr>{cells}</tr></table>")
}

/// Price table markup; each row is (label, specification, price cells).
pub fn price_table_html(rows: &[(&str, &str, &[&str])]) -> String {
    let mut body = String::new();
    for (label, specification, prices) in rows {
        body.push_str(&format!("<tr><td>{label}</td><td>{specification}</td>"));
        for price in *prices {
            body.push_str(&format!("<td>{price}</td>"));
        }
        body.push_str("</tr>");
    }
    format!("<table>{body}</table>")
}

/// A market record fixture with one priced and one unpriced commodity.
pub fn sample_records() -> Vec<MarketRecord> {
    vec![MarketRecord::with_commodities(
        0,
        "TABUNOK PUBLIC MARKET",
        vec![
            CommodityEntry::new(
                "Rice",
                CommodityCategory::Rice,
                "Regular",
                Some(dec!(45.00)),
            ),
            CommodityEntry::new("Sili", CommodityCategory::Spices, "Labuyo", None),
        ],
    )]
}

/// Scripted price feed: per-category fixture tables, injectable outages,
/// and fetch counters.
#[derive(Clone)]
pub struct MockFeed {
    header: String,
    tables: Arc<HashMap<u8, String>>,
    failing: Arc<HashSet<u8>>,
    header_fetches: Arc<AtomicUsize>,
    table_fetches: Arc<AtomicUsize>,
}

impl MockFeed {
    pub fn new(header_html: impl Into<String>) -> Self {
        Self {
            header: header_html.into(),
            tables: Arc::new(HashMap::new()),
            failing: Arc::new(HashSet::new()),
            header_fetches: Arc::new(AtomicUsize::new(0)),
            table_fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Serve the given markup for one category; unscripted categories get
    /// an empty body.
    #[must_use]
    pub fn with_table(mut self, category: CommodityCategory, html: impl Into<String>) -> Self {
        let mut tables = (*self.tables).clone();
        tables.insert(category.id(), html.into());
        self.tables = Arc::new(tables);
        self
    }

    /// Simulate a transport outage for the given categories.
    #[must_use]
    pub fn with_failing(mut self, categories: &[CommodityCategory]) -> Self {
        self.failing = Arc::new(categories.iter().map(|c| c.id()).collect());
        self
    }

    pub fn header_fetches(&self) -> usize {
        self.header_fetches.load(Ordering::SeqCst)
    }

    pub fn table_fetches(&self) -> usize {
        self.table_fetches.load(Ordering::SeqCst)
    }
}

impl PriceFeed for MockFeed {
    async fn market_header(&self, _request: &PriceRequest) -> Result<String> {
        self.header_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.header.clone())
    }

    async fn price_table(
        &self,
        category: CommodityCategory,
        _request: &PriceRequest,
    ) -> Result<String> {
        self.table_fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&category.id()) {
            return Err(Error::Connection("simulated category outage".to_string()));
        }
        Ok(self.tables.get(&category.id()).cloned().unwrap_or_default())
    }
}

/// In-memory snapshot store with read/write counters and injectable write
/// failures.
#[derive(Clone, Default)]
pub struct MemoryStore {
    snapshot: Arc<Mutex<Option<DailySnapshot>>>,
    fail_writes: bool,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    #[must_use]
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for MemoryStore {
    async fn today(&self) -> Result<Option<DailySnapshot>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot.lock().clone())
    }

    async fn save_today(&self, records: &[MarketRecord]) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Database("simulated write failure".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        *self.snapshot.lock() = Some(DailySnapshot::new(
            now.date_naive(),
            records.to_vec(),
            now,
            now,
        ));
        Ok(())
    }
}
