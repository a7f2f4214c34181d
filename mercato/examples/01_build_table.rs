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

    // 1. Build the orchestrator and register the mock source.
    let mercato = Mercato::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // 2. Describe the table we want: two coins, the macro series, two
    //    search keywords, 90 days of history.
    let req = TableRequest::new(["bitcoin", "ethereum"])
        .macro_key(mercato_mock::VALID_MACRO_KEY)
        .keywords(["buy bitcoin", "ethereum price"])
        .days(90);

    // 3. Aggregate: fetch, derive dominance, outer-join, fill gaps.
    let table = mercato.build_table(&req)?;
    println!(
        "Built a table with {} rows and columns: {}",
        table.len(),
        table.column_names().collect::<Vec<_>>().join(", ")
    );

    // 4. Print the last few rows of the bitcoin and dominance columns.
    for date in table.dates().iter().rev().take(5).rev() {
        println!(
            " - {date}: bitcoin cap = {:?}, dominance = {:?}",
            table.numeric_at(*date, "bitcoin"),
            table.numeric_at(*date, mercato::DOMINANCE_COLUMN),
        );
    }

    // 5. Export the whole table as CSV (first three lines shown here).
    let csv = table.to_csv()?;
    println!("\n## CSV preview:");
    for line in csv.lines().take(3) {
        println!("{line}");
    }

    Ok(())
}
