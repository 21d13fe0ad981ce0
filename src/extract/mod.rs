// src/extract/mod.rs

pub mod city;
pub mod link;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, trace};

use crate::types::WalkAudit;

pub use city::parse_city;
pub use link::clean_redirect_link;

/// Rows with fewer cells are decorative bands above the real header.
pub const MIN_CELLS: usize = 10;

const HEADER_LABEL: &str = "CITY/TOWN";
const BANNER_PHRASE: &str = "WALK AUDIT DATABASE";

const COL_CITY: usize = 0;
const COL_YEAR: usize = 1;
const COL_SUMMARY: usize = 2;
const COL_LONG_TERM: usize = 3;
const COL_SHORT_TERM: usize = 4;
const COL_STREETS: usize = 5;
const COL_THEMES: usize = 6;
const COL_VIEW: usize = 7;
const COL_FACILITATOR: usize = 8;
const COL_ORGANIZER: usize = 9;

static ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody tr").expect("row selector should parse"));
static CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("cell selector should parse"));
static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("anchor selector should parse"));

/// Map every data row of the sheet table to a `WalkAudit`, in document order.
#[instrument(level = "debug", skip(doc))]
pub fn extract(doc: &Html) -> Vec<WalkAudit> {
    let mut rows = 0usize;
    let audits: Vec<WalkAudit> = doc
        .select(&ROWS)
        .inspect(|_| rows += 1)
        .filter_map(row_to_walk_audit)
        .collect();

    debug!(rows, records = audits.len(), "Finished extraction");
    audits
}

/// Build a record from one `<tr>`, or `None` for rows that carry no data.
pub fn row_to_walk_audit(row: ElementRef<'_>) -> Option<WalkAudit> {
    let cells: Vec<ElementRef<'_>> = row.select(&CELLS).collect();
    if cells.len() < MIN_CELLS {
        trace!(cells = cells.len(), "Skipping short row");
        return None;
    }

    let parsed = parse_city(&cell_text(&cells, COL_CITY));
    if is_header_or_banner(&parsed.city_town) {
        trace!(city_town = %parsed.city_town, "Skipping header row");
        return None;
    }

    let year = cell_text(&cells, COL_YEAR);
    if parsed.city_town.is_empty() && year.is_empty() {
        trace!("Skipping blank row");
        return None;
    }

    Some(WalkAudit {
        city_town: parsed.city_town,
        city: parsed.city,
        neighborhood: parsed.neighborhood,
        year,
        summary: cell_text(&cells, COL_SUMMARY),
        long_term_recommendations: cell_text(&cells, COL_LONG_TERM),
        short_term_recommendations: cell_text(&cells, COL_SHORT_TERM),
        streets_intersections: cell_text(&cells, COL_STREETS),
        themes: cell_text(&cells, COL_THEMES),
        view: cell_link(&cells, COL_VIEW),
        facilitator_author: cell_text(&cells, COL_FACILITATOR),
        organizer_lead_organization: cell_text(&cells, COL_ORGANIZER),
    })
}

fn is_header_or_banner(city_town: &str) -> bool {
    city_town == HEADER_LABEL || city_town.contains(BANNER_PHRASE)
}

/// Trimmed text content of cell `idx`; empty when the cell is missing.
pub fn cell_text(cells: &[ElementRef<'_>], idx: usize) -> String {
    cells
        .get(idx)
        .map(|cell| cell.text().collect::<String>().trim().to_owned())
        .unwrap_or_default()
}

/// Href of the first anchor in cell `idx` with redirects unwrapped,
/// falling back to the cell text.
pub fn cell_link(cells: &[ElementRef<'_>], idx: usize) -> String {
    let href = cells
        .get(idx)
        .and_then(|cell| cell.select(&ANCHOR).next())
        .and_then(|a| a.value().attr("href"));

    match href {
        Some(href) => clean_redirect_link(href),
        None => cell_text(cells, idx),
    }
}
