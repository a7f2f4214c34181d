use chrono::Duration;
use mercato_core::DatedSeries;

use super::anchor_date;

/// Daily market caps for the supported coins, `days` rows ending at the
/// anchor date. Unknown coins have no fixture.
pub fn by_coin(coin: &str, days: u32) -> Option<DatedSeries> {
    let (base, drift) = match coin {
        "bitcoin" => (1_200_000_000_000.0, 450_000_000.0),
        "ethereum" => (420_000_000_000.0, 180_000_000.0),
        "binancecoin" => (85_000_000_000.0, 40_000_000.0),
        "solana" => (65_000_000_000.0, 55_000_000.0),
        _ => return None,
    };
    Some(DatedSeries::from_values(coin, build(base, drift, days)))
}

fn build(base: f64, drift: f64, days: u32) -> Vec<(chrono::NaiveDate, f64)> {
    let end = anchor_date();
    (0..days)
        .map(|i| {
            let back = i64::from(days - 1 - i);
            let date = end - Duration::days(back);
            // Mild weekly wobble on top of a linear drift.
            let wobble = 0.004 * f64::from(i % 7) * base;
            (date, base + drift * f64::from(i) + wobble)
        })
        .collect()
}
