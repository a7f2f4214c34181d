use std::sync::Arc;

use mercato::{Mercato, TableRequest};
use mercato_mock::MockSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. Aggregate a year of mock data.
    let mercato = Mercato::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;
    let table = mercato.build_table(&TableRequest::new(["bitcoin", "ethereum"]))?;

    // 2. Forecast bitcoin's market cap 30 days ahead.
    let forecast = mercato.forecast(&table, "bitcoin", 30)?;
    println!(
        "bitcoin: fitted {} observed days, MAE = {:.3e}, RMSE = {:.3e}",
        forecast.history().len(),
        forecast.mae,
        forecast.rmse,
    );
    println!("First 5 future days:");
    for p in forecast.future().iter().take(5) {
        println!(
            " - {}: {:.0} [{:.0}, {:.0}]",
            p.date, p.yhat, p.yhat_lower, p.yhat_upper
        );
    }

    // 3. Forecast several columns at once; failures stay per-column.
    let columns = vec!["ethereum".to_string(), mercato::DOMINANCE_COLUMN.to_string()];
    for (column, result) in mercato.forecast_each(&table, &columns, 14) {
        match result {
            Ok(f) => println!("{column}: 14-day forecast ready (RMSE {:.3e})", f.rmse),
            Err(err) => println!("{column}: skipped ({err})"),
        }
    }

    Ok(())
}
