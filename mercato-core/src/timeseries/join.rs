use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::MercatoError;
use crate::types::{AlignedTable, BITCOIN, Cell, Column, DOMINANCE_COLUMN, DatedSeries};

/// Derive the bitcoin dominance series from the fetched coin-cap series.
///
/// For each date where bitcoin's cap is numeric,
/// `dominance = cap(bitcoin) / Σ cap(coins present that date) * 100`. Dates
/// where the selected-coin total is zero carry no dominance value.
///
/// # Errors
/// Returns `Err(MercatoError::DataUnavailable)` when no series named
/// `bitcoin` is among the inputs. Dominance is undefined without it; the
/// aggregation must abort rather than silently omit the column.
pub fn dominance(coin_series: &[DatedSeries]) -> Result<DatedSeries, MercatoError> {
    let btc = coin_series
        .iter()
        .find(|s| s.name() == BITCOIN)
        .ok_or_else(|| {
            MercatoError::data_unavailable("bitcoin market caps (required for dominance)")
        })?;

    let mut out = DatedSeries::empty(DOMINANCE_COLUMN);
    for (date, cell) in btc.iter() {
        let Some(btc_cap) = cell.as_numeric() else {
            continue;
        };
        // Missing coin values on a date are skipped, not treated as zero.
        let total: f64 = coin_series
            .iter()
            .filter_map(|s| s.get(date).and_then(Cell::as_numeric))
            .sum();
        if total > 0.0 {
            out.insert(date, Cell::Number(btc_cap / total * 100.0));
        }
    }
    Ok(out)
}

/// Outer-join dated series on the date key.
///
/// - The row set is the union of all dates seen across inputs, ascending.
/// - One column per input series, in input order, named after the series.
/// - Cells absent from a series on a given date are `Missing`.
#[must_use]
pub fn outer_join<I>(series: I) -> AlignedTable
where
    I: IntoIterator<Item = DatedSeries>,
{
    let parts: Vec<_> = series.into_iter().map(DatedSeries::into_parts).collect();

    let mut union: BTreeSet<NaiveDate> = BTreeSet::new();
    for (_, points) in &parts {
        union.extend(points.keys().copied());
    }
    let dates: Vec<NaiveDate> = union.into_iter().collect();

    let columns = parts
        .into_iter()
        .map(|(name, mut points)| Column {
            cells: dates
                .iter()
                .map(|d| points.remove(d).unwrap_or(Cell::Missing))
                .collect(),
            name,
        })
        .collect();

    AlignedTable { dates, columns }
}
