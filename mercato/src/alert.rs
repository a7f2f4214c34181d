//! The 24h drop scalar and the outbound notification seam.
//!
//! The core's job ends at producing the scalar and the event; delivery (mail,
//! chat, webhook) belongs to whatever implements [`AlertSink`] downstream.

use mercato_core::AlignedTable;

/// A drop event: the worst per-coin 24h change crossed the caller's
/// threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct DropAlert {
    /// The worst (minimum) per-coin percentage change over the last day.
    pub change_pct: f64,
    /// The threshold that was crossed, as a positive drop percentage.
    pub threshold_pct: f64,
}

/// Outbound notification seam for drop alerts.
pub trait AlertSink {
    /// Deliver one alert. Implementations own transport and credentials.
    fn notify(&self, alert: &DropAlert);
}

/// The minimum (worst) per-coin percentage change between the table's last
/// two rows.
///
/// Only coins with numeric values on both rows participate; `None` when the
/// table has fewer than two rows or no coin qualifies.
#[must_use]
pub fn worst_24h_change(table: &AlignedTable, coins: &[String]) -> Option<f64> {
    let dates = table.dates();
    if dates.len() < 2 {
        return None;
    }
    let prev = dates[dates.len() - 2];
    let last = dates[dates.len() - 1];
    coins
        .iter()
        .filter_map(|coin| {
            let before = table.numeric_at(prev, coin)?;
            let after = table.numeric_at(last, coin)?;
            (before != 0.0).then(|| (after - before) / before * 100.0)
        })
        .min_by(f64::total_cmp)
}

/// Fire `sink` when the worst 24h change is a drop beyond `threshold_pct`.
///
/// Returns the alert that was delivered, or `None` when nothing crossed the
/// threshold (or no change could be computed).
pub fn check_drop_alert(
    table: &AlignedTable,
    coins: &[String],
    threshold_pct: f64,
    sink: &dyn AlertSink,
) -> Option<DropAlert> {
    let change_pct = worst_24h_change(table, coins)?;
    if change_pct > -threshold_pct {
        return None;
    }
    let alert = DropAlert {
        change_pct,
        threshold_pct,
    };
    tracing::warn!(change_pct, threshold_pct, "24h drop beyond threshold");
    sink.notify(&alert);
    Some(alert)
}
