//! mercato-core
//!
//! Core types, traits, and utilities shared across the mercato ecosystem.
//!
//! - `types`: common data structures (cells, dated series, the aligned table,
//!   forecasts, requests).
//! - `source`: the `DataSource` trait and data-producer role traits.
//! - `timeseries`: dominance derivation, the date-keyed outer join, and the
//!   deterministic gap-fill policy.
//! - `forecast`: the additive trend + seasonal model with fit metrics.
//!
//! Everything here is synchronous and blocking: a fetch or a fit runs to
//! completion or failure, sources are consulted sequentially, and each
//! invocation owns its own series and table instances. There is no shared
//! mutable state and nothing is cached across calls.
#![warn(missing_docs)]

/// Unified error taxonomy.
pub mod error;
/// Per-column probabilistic forecasting.
pub mod forecast;
/// The `DataSource` trait and producer role traits.
pub mod source;
/// Join and fill utilities for aligning heterogeneous series.
pub mod timeseries;
pub mod types;

pub use error::MercatoError;
pub use forecast::forecast;
pub use forecast::metrics::{mean_absolute_error, root_mean_squared_error};
pub use source::{
    DataSource, MacroSeriesProvider, MarketCapProvider, SearchInterestProvider, SentimentProvider,
};
pub use timeseries::fill::interpolate_then_ffill;
pub use timeseries::join::{dominance, outer_join};
pub use types::*;
