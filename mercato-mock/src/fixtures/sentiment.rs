use chrono::Duration;
use mercato_core::DatedSeries;

use super::anchor_date;

const DAYS: u32 = 365;

/// One year of daily fear/greed readings in [0, 100], ending at the anchor
/// date.
pub fn daily() -> DatedSeries {
    let end = anchor_date();
    DatedSeries::from_values(
        "fear_greed",
        (0..DAYS).map(|i| {
            let back = i64::from(DAYS - 1 - i);
            let date = end - Duration::days(back);
            // Deterministic sawtooth between 20 and 80.
            let value = 20.0 + f64::from(i % 61);
            (date, value)
        }),
    )
}
