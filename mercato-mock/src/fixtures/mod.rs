//! Deterministic fixture series, all anchored at a fixed end date so runs are
//! reproducible in CI.

use chrono::NaiveDate;

pub mod macro_series;
pub mod market_caps;
pub mod sentiment;
pub mod trends;

/// Last date every fixture series ends on.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}
