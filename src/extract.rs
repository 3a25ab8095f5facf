use crate::error::{EtlError, Result};
use crate::types::BankRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Cell layout of the source table: a rank column, then the bank name,
/// then the market cap in USD billions.
const NAME_CELL: usize = 1;
const MARKET_CAP_CELL: usize = 2;

/// Extracts one `BankRecord` per qualifying row of the first table body in
/// the document, in document order. Fails when the document has no table
/// body at all.
pub fn extract_banks(html: &str) -> Result<Vec<BankRecord>> {
    let document = Html::parse_document(html);
    let tbody_selector = Selector::parse("tbody").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let body = document
        .select(&tbody_selector)
        .next()
        .ok_or_else(|| EtlError::Parse("no table body found in document".to_string()))?;

    let mut records = Vec::new();
    for row in body.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if !is_bank_row(&cells) {
            continue;
        }
        records.push(BankRecord {
            name: cell_text(&cells[NAME_CELL]),
            market_cap: cell_text(&cells[MARKET_CAP_CELL]),
        });
    }

    debug!("Extracted {} qualifying rows", records.len());
    if records.is_empty() {
        warn!("No qualifying rows found - the page structure may have changed");
    }

    Ok(records)
}

/// Row-classification predicate: does this row represent an actual bank
/// entry rather than a header, footnote or annotation row?
///
/// A row qualifies when it carries the rank/name/market-cap cells, the
/// name cell holds at least one hyperlink (real entries link to the
/// bank's article), and the name cell's raw text has no underscore.
/// The underscore check excludes footnote and markup artifacts that can
/// show up as linked rows.
fn is_bank_row(cells: &[ElementRef]) -> bool {
    if cells.len() <= MARKET_CAP_CELL {
        return false;
    }
    let name_cell = &cells[NAME_CELL];
    let link_selector = Selector::parse("a").unwrap();
    if name_cell.select(&link_selector).next().is_none() {
        return false;
    }
    !name_cell.text().collect::<String>().contains('_')
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
