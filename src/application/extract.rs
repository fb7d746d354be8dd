//! Markup extraction for upstream price tables.
//!
//! The feed answers with HTML fragments of uneven quality: price tables
//! sometimes arrive without their enclosing `<table>` wrapper, cells carry
//! an `N/A` sentinel instead of a number, and header rows are mixed in with
//! data rows. Extraction is lenient for price rows (bad cells become absent
//! prices, no rows becomes an empty result) and strict for the market-name
//! header (zero names means the upstream layout changed).

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;

use crate::domain::{PricePoint, RawCommodityRow};
use crate::error::{Error, Result};

/// Parse an upstream price table into commodity rows.
///
/// First cell is the commodity label, second the specification, every
/// remaining cell one price per market in positional order. Returns an
/// empty vec when the markup contains no usable rows.
#[must_use]
pub fn parse_price_rows(html: &str) -> Vec<RawCommodityRow> {
    let document = Html::parse_document(&with_table_wrapper(html));
    let row_selector = selector("tr");
    let cell_selector = selector("td, th");

    let mut rows = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<String> = row.select(&cell_selector).map(|c| cell_text(&c)).collect();
        if cells.len() < 2 {
            continue;
        }

        let label = cells[0].clone();
        if label.is_empty() || label.to_ascii_uppercase().contains("COMMODITY") {
            continue;
        }

        let prices = cells[2..]
            .iter()
            .enumerate()
            .map(|(market_index, cell)| PricePoint::new(market_index, parse_price_cell(cell)))
            .collect();

        rows.push(RawCommodityRow::new(label, cells[1].clone(), prices));
    }
    rows
}

/// Parse the market-name header listing for a region.
///
/// # Errors
///
/// Returns `Error::Parse` when no market names are found: that indicates
/// the upstream page layout changed, and the sync must not proceed on it.
pub fn parse_market_names(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(&with_table_wrapper(html));
    let cell_selector = selector("td, th");

    let mut names: Vec<String> = Vec::new();
    for cell in document.select(&cell_selector) {
        let text = cell_text(&cell);
        if looks_like_market_name(&text) && !names.contains(&text) {
            names.push(text);
        }
    }

    if names.is_empty() {
        return Err(Error::Parse(
            "no market names found in header markup".to_string(),
        ));
    }
    Ok(names)
}

/// The feed intermittently omits the `<table>` wrapper and sends bare
/// `<tr>` fragments; html5ever drops row tags that have no table ancestor,
/// so synthesize the wrapper before parsing.
fn with_table_wrapper(html: &str) -> Cow<'_, str> {
    let lower = html.to_ascii_lowercase();
    if lower.contains("<tr") && !lower.contains("<table") {
        Cow::Owned(format!("<table>{html}</table>"))
    } else {
        Cow::Borrowed(html)
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps the upstream "not applicable" sentinel, and anything else that is
/// not a number, to an absent price. Thousands separators are accepted.
fn parse_price_cell(cell: &str) -> Option<Decimal> {
    let cleaned = cell.trim();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("n/a") {
        return None;
    }
    cleaned.replace(',', "").parse::<Decimal>().ok()
}

fn looks_like_market_name(line: &str) -> bool {
    line.len() > 5
        && line.contains("MARKET")
        && !line.contains("COMMODITY")
        && !line.contains("SPECIFICATIONS")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const WRAPPED_TABLE: &str = "<table>\
        <tr><td>COMMODITY</td><td>SPECIFICATIONS</td><td>A MARKET</td><td>B MARKET</td></tr>\
        <tr><td>Rice</td><td>Regular</td><td>45.00</td><td>N/A</td></tr>\
        <tr><td>Bangus</td><td>Medium</td><td>180.00</td><td>175.50</td></tr>\
        </table>";

    const BARE_FRAGMENT: &str = "\
        <tr><td>Rice</td><td>Regular</td><td>45.00</td><td>N/A</td></tr>\
        <tr><td>Bangus</td><td>Medium</td><td>180.00</td><td>175.50</td></tr>";

    // --- parse_price_rows ---

    #[test]
    fn parses_wrapped_table() {
        let rows = parse_price_rows(WRAPPED_TABLE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label(), "Rice");
        assert_eq!(rows[0].specification(), "Regular");
        assert_eq!(rows[1].label(), "Bangus");
    }

    #[test]
    fn parses_fragment_missing_table_wrapper() {
        let rows = parse_price_rows(BARE_FRAGMENT);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label(), "Rice");
        assert_eq!(rows[0].prices().len(), 2);
    }

    #[test]
    fn not_applicable_sentinel_maps_to_absent_price() {
        let rows = parse_price_rows(WRAPPED_TABLE);
        let prices = rows[0].prices();
        assert_eq!(prices[0].price(), Some(dec!(45.00)));
        assert_eq!(prices[1].price(), None);
    }

    #[test]
    fn sentinel_is_case_insensitive() {
        let html = "<tr><td>Rice</td><td>Regular</td><td>n/a</td><td>N/a</td></tr>";
        let rows = parse_price_rows(html);
        assert!(rows[0].prices().iter().all(|p| p.price().is_none()));
    }

    #[test]
    fn non_numeric_cell_maps_to_absent_price_not_error() {
        let html = "<tr><td>Rice</td><td>Regular</td><td>soon</td><td>52.00</td></tr>";
        let rows = parse_price_rows(html);
        assert_eq!(rows[0].prices()[0].price(), None);
        assert_eq!(rows[0].prices()[1].price(), Some(dec!(52.00)));
    }

    #[test]
    fn thousands_separators_are_accepted() {
        let html = "<tr><td>Beef</td><td>Brisket</td><td>1,250.00</td></tr>";
        let rows = parse_price_rows(html);
        assert_eq!(rows[0].prices()[0].price(), Some(dec!(1250.00)));
    }

    #[test]
    fn market_indices_are_positional() {
        let rows = parse_price_rows(WRAPPED_TABLE);
        let indices: Vec<usize> = rows[0].prices().iter().map(|p| p.market_index()).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn header_row_is_skipped() {
        let rows = parse_price_rows(WRAPPED_TABLE);
        assert!(rows.iter().all(|r| r.label() != "COMMODITY"));
    }

    #[test]
    fn short_rows_are_skipped() {
        let html = "<table><tr><td>lonely</td></tr></table>";
        assert!(parse_price_rows(html).is_empty());
    }

    #[test]
    fn no_rows_yields_empty_not_error() {
        assert!(parse_price_rows("<html><body><p>maintenance</p></body></html>").is_empty());
        assert!(parse_price_rows("").is_empty());
    }

    #[test]
    fn row_without_price_cells_keeps_empty_price_vector() {
        let html = "<tr><td>Rice</td><td>Regular</td></tr>";
        let rows = parse_price_rows(html);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].prices().is_empty());
    }

    #[test]
    fn nested_markup_in_cells_is_flattened() {
        let html = "<tr><td><b>Rice</b></td><td><span>Well</span> <span>milled</span></td><td>48.00</td></tr>";
        let rows = parse_price_rows(html);
        assert_eq!(rows[0].label(), "Rice");
        assert_eq!(rows[0].specification(), "Well milled");
    }

    // --- parse_market_names ---

    #[test]
    fn extracts_market_names_in_order() {
        let html = "<table><tr>\
            <th>COMMODITY</th><th>SPECIFICATIONS</th>\
            <th>TABUNOK PUBLIC MARKET</th><th>PASIL PUBLIC MARKET</th>\
            </tr></table>";
        let names = parse_market_names(html).unwrap();
        assert_eq!(names, vec!["TABUNOK PUBLIC MARKET", "PASIL PUBLIC MARKET"]);
    }

    #[test]
    fn duplicate_names_are_collapsed() {
        let html = "<table><tr>\
            <th>CARBON PASIL MARKET</th><th>CARBON PASIL MARKET</th>\
            </tr></table>";
        let names = parse_market_names(html).unwrap();
        assert_eq!(names, vec!["CARBON PASIL MARKET"]);
    }

    #[test]
    fn header_cells_are_not_market_names() {
        let html = "<table><tr>\
            <th>COMMODITY MARKET LIST</th><th>SPECIFICATIONS MARKET</th>\
            <th>DAO PUBLIC MARKET</th>\
            </tr></table>";
        let names = parse_market_names(html).unwrap();
        assert_eq!(names, vec!["DAO PUBLIC MARKET"]);
    }

    #[test]
    fn zero_names_is_a_hard_error() {
        let err = parse_market_names("<table><tr><td>nothing here</td></tr></table>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn market_names_parse_from_bare_fragment() {
        let html = "<tr><th>LAZI PUBLIC MARKET</th><th>DAO PUBLIC MARKET</th></tr>";
        let names = parse_market_names(html).unwrap();
        assert_eq!(names.len(), 2);
    }
}
