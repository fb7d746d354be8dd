//! Inverts commodity-indexed price rows into market-indexed records.

use crate::domain::{CommodityCategory, CommodityEntry, MarketRecord, RawCommodityRow};

/// Group category-tagged commodity rows by market.
///
/// One record is produced per configured market, in list order, whether or
/// not any commodity was observed there. Each in-range price point appends
/// a commodity entry to its market; indices beyond the configured list are
/// silently dropped (the upstream occasionally renders more price columns
/// than known markets). Within a record, commodities keep the order they
/// were appended in: category fetch order, then row order.
///
/// Pure function with no I/O and no hidden state.
#[must_use]
pub fn group_by_market(
    rows: &[(CommodityCategory, RawCommodityRow)],
    markets: &[String],
) -> Vec<MarketRecord> {
    let mut records: Vec<MarketRecord> = markets
        .iter()
        .enumerate()
        .map(|(index, name)| MarketRecord::new(index, name.clone()))
        .collect();

    for (category, row) in rows {
        for point in row.prices() {
            if let Some(record) = records.get_mut(point.market_index()) {
                record.push(CommodityEntry::new(
                    row.label(),
                    *category,
                    row.specification(),
                    point.price(),
                ));
            }
        }
    }

    records
}
