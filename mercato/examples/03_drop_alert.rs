use std::sync::Arc;

use mercato::alert::{AlertSink, DropAlert};
use mercato::{Mercato, TableRequest, check_drop_alert, worst_24h_change};
use mercato_mock::MockSource;

/// Sink that prints alerts instead of mailing them.
struct StdoutSink;

impl AlertSink for StdoutSink {
    fn notify(&self, alert: &DropAlert) {
        println!(
            "ALERT: worst 24h change {:.2}% crossed the -{:.1}% threshold",
            alert.change_pct, alert.threshold_pct
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. Aggregate a table for the watched coins.
    let coins = vec!["bitcoin".to_string(), "ethereum".to_string()];
    let mercato = Mercato::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;
    let table = mercato.build_table(&TableRequest::new(coins.clone()).days(30))?;

    // 2. Inspect the worst per-coin change over the table's last day.
    match worst_24h_change(&table, &coins) {
        Some(change) => println!("Worst 24h change across the watchlist: {change:.2}%"),
        None => println!("Not enough data for a 24h change"),
    }

    // 3. Fire the sink only when the drop crosses the threshold. The mock
    //    data drifts gently, so a tight threshold is needed to see it fire.
    for threshold in [10.0, 0.1] {
        match check_drop_alert(&table, &coins, threshold, &StdoutSink) {
            Some(_) => {}
            None => println!("No drop beyond -{threshold:.1}%"),
        }
    }

    Ok(())
}
