//! SQLite snapshot store tests against a real temporary database.

mod support;

use std::sync::Arc;
use std::time::Duration;

use diesel::prelude::*;

use presyo::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use presyo::adapter::outbound::sqlite::database::schema::daily_snapshots;
use presyo::adapter::outbound::sqlite::SqliteSnapshotStore;
use presyo::application::{PriceCache, SyncService};
use presyo::domain::{CommodityCategory, CommodityEntry, MarketRecord, PriceRequest, RegionCatalog};
use presyo::port::outbound::SnapshotStore;
use rust_decimal_macros::dec;

use support::{market_header_html, price_table_html, sample_records, MockFeed};

fn setup_db() -> (tempfile::TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = dir.path().join("presyo.db");
    let pool = create_pool(url.to_str().expect("utf-8 path")).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    (dir, pool)
}

fn count_rows(pool: &DbPool) -> i64 {
    let mut conn = pool.get().unwrap();
    daily_snapshots::table.count().get_result(&mut conn).unwrap()
}

#[tokio::test]
async fn two_saves_on_the_same_day_leave_exactly_one_row() {
    let (_dir, pool) = setup_db();
    let store = SqliteSnapshotStore::new(pool.clone());

    store.save_today(&sample_records()).await.unwrap();
    store.save_today(&sample_records()).await.unwrap();

    assert_eq!(count_rows(&pool), 1);
}

#[tokio::test]
async fn overwrite_preserves_created_at_and_replaces_records() {
    let (_dir, pool) = setup_db();
    let store = SqliteSnapshotStore::new(pool.clone());

    store.save_today(&sample_records()).await.unwrap();
    let first = store.today().await.unwrap().unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    let replacement = vec![MarketRecord::with_commodities(
        0,
        "TABUNOK PUBLIC MARKET",
        vec![CommodityEntry::new(
            "Rice",
            CommodityCategory::Rice,
            "Well milled",
            Some(dec!(48.50)),
        )],
    )];
    store.save_today(&replacement).await.unwrap();
    let second = store.today().await.unwrap().unwrap();

    assert_eq!(second.created_at(), first.created_at());
    assert!(second.updated_at() > first.updated_at());
    assert_eq!(second.market_records(), replacement.as_slice());
    assert_eq!(count_rows(&pool), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_saves_produce_a_single_snapshot() {
    let (_dir, pool) = setup_db();
    let store = Arc::new(SqliteSnapshotStore::new(pool.clone()));

    let mut handles = vec![];
    for _ in 0..10 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.save_today(&sample_records()).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(count_rows(&pool), 1);
}

#[tokio::test]
async fn second_sync_on_the_same_day_is_served_from_the_store() {
    let (_dir, pool) = setup_db();

    let feed = MockFeed::new(market_header_html(&["A MARKET", "B MARKET"])).with_table(
        CommodityCategory::Rice,
        price_table_html(&[("Rice", "Regular", &["45.00", "N/A"])]),
    );
    let mut catalog = RegionCatalog::empty();
    catalog.insert(
        "070000000",
        vec!["A MARKET".to_string(), "B MARKET".to_string()],
    );
    let svc = SyncService::new(
        feed.clone(),
        SqliteSnapshotStore::new(pool.clone()),
        catalog,
        Duration::from_secs(5),
    );
    let cache = PriceCache::new(Duration::from_millis(1));
    let request = PriceRequest::try_new("all", "070000000", 10).unwrap();

    let first = svc.sync_cached(&cache, &request).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = svc.sync_cached(&cache, &request).await.unwrap();

    assert_eq!(second, first);
    // cache expired, but the daily store short-circuited the refetch
    assert_eq!(feed.table_fetches(), 8);
    assert_eq!(count_rows(&pool), 1);
}
