use chrono::Duration;
use mercato_core::{Cell, DatedSeries, PARTIAL_MARKER_COLUMN};

use super::anchor_date;

const WEEKS: u32 = 52;

/// Weekly search-interest series, one per keyword, plus the completeness
/// marker the real producer appends. The orchestrator must strip the marker
/// before merging.
pub fn weekly(keywords: &[String]) -> Vec<DatedSeries> {
    let end = anchor_date();
    let mut out: Vec<DatedSeries> = keywords
        .iter()
        .map(|kw| {
            // Keyword length seeds the level so distinct keywords differ.
            let level = 10.0 + (kw.len() % 40) as f64;
            DatedSeries::from_values(
                kw.clone(),
                (0..WEEKS).map(|w| {
                    let back = i64::from((WEEKS - 1 - w) * 7);
                    let date = end - Duration::days(back);
                    (date, level + f64::from(w % 13))
                }),
            )
        })
        .collect();

    let mut marker = DatedSeries::empty(PARTIAL_MARKER_COLUMN);
    marker.insert(end, Cell::Text("true".into()));
    out.push(marker);
    out
}
