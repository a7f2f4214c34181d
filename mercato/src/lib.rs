//! Mercato aggregates heterogeneous crypto market series and forecasts them.
//!
//! Overview
//! - Registers pluggable data sources that implement the `mercato_core`
//!   producer contracts (per-coin market caps, a macro series, a sentiment
//!   index, and search interest).
//! - Aligns every fetched series onto one daily calendar: dominance is
//!   derived from the coin caps, all series are outer-joined on the date key,
//!   and gaps are closed by linear interpolation then forward fill.
//! - Forecasts any column of the aligned table with an additive
//!   trend + seasonal model, returning an uncertainty band and MAE/RMSE over
//!   the historical fit.
//! - Exposes the worst 24h drop as a scalar plus an explicit [`AlertSink`]
//!   seam, keeping mail transport and credentials out of the core.
//!
//! Key behaviors and trade-offs
//! - Everything is synchronous, blocking, and sequential: one attempt per
//!   source per aggregation, no retries, no cross-request caching. Each call
//!   owns its own series and table, so the orchestrator is re-entrant.
//! - A missing required coin series aborts the aggregation outright; an
//!   optional macro source degrades to an empty column with a warning.
//! - Per-column forecast failures are isolated: use
//!   [`Mercato::forecast_each`] to keep one bad column from blocking others.
//!
//! Examples
//! Building an orchestrator and a table:
//! ```rust,ignore
//! use std::sync::Arc;
//! use mercato::{Mercato, TableRequest};
//!
//! let mercato = Mercato::builder()
//!     .with_source(Arc::new(CoingeckoSource::new()))
//!     .build()?;
//! let req = TableRequest::new(["bitcoin", "ethereum"])
//!     .macro_key("...")
//!     .keywords(["buy bitcoin"]);
//! let table = mercato.build_table(&req)?;
//! let forecast = mercato.forecast(&table, "bitcoin", 30)?;
//! println!("{}", table.to_csv()?);
//! ```
//!
//! See `mercato/examples/` for runnable end-to-end demonstrations against
//! the mock source.
#![warn(missing_docs)]

/// The 24h drop scalar and notification seam.
pub mod alert;
mod aggregate;
pub(crate) mod core;
mod forecast;

pub use alert::{AlertSink, DropAlert, check_drop_alert, worst_24h_change};
pub use core::{Mercato, MercatoBuilder};

// Re-export core types for convenience
pub use mercato_core::{
    // Data model
    AlignedTable,
    // Foundational types
    BITCOIN,
    Cell,
    Column,
    DOMINANCE_COLUMN,
    DataSource,
    DatedSeries,
    Forecast,
    ForecastPoint,
    MercatoError,
    PARTIAL_MARKER_COLUMN,

    // Request types
    TableRequest,
};
