//! Data-producer role traits and the primary `DataSource` interface.
//!
//! Producers are collaborators, not part of the core: each one turns some
//! upstream (HTTP API, file, fixture) into a [`DatedSeries`]. The core only
//! sees the trait surface. Calls are synchronous and blocking; the aggregation
//! model is single-threaded and performs exactly one attempt per source per
//! request.

use crate::MercatoError;
use crate::types::DatedSeries;

/// Focused role trait for sources that provide per-coin market capitalization.
pub trait MarketCapProvider: Send + Sync {
    /// Fetch the market-cap series for one coin over a day-count window, in a
    /// fixed currency.
    ///
    /// # Errors
    /// Returns `Err(MercatoError::DataUnavailable)` when the upstream response
    /// lacks the expected market-cap field for the coin, and
    /// `Err(MercatoError::Producer)` for outright call failures. Either aborts
    /// the whole aggregation: a partial coin set never proceeds.
    fn market_caps(&self, coin: &str, days: u32) -> Result<DatedSeries, MercatoError>;
}

/// Focused role trait for sources that provide a named macro observation
/// series (e.g. a money-supply aggregate).
pub trait MacroSeriesProvider: Send + Sync {
    /// REQUIRED: the stable series/column name this provider emits, used to
    /// label the (possibly empty) macro column even when the fetch degrades.
    fn series_id(&self) -> &'static str;

    /// Fetch the macro observation series using the given access key.
    ///
    /// # Errors
    /// Any error here is non-fatal to the aggregation: the caller degrades to
    /// an empty series and logs a warning.
    fn observations(&self, api_key: &str) -> Result<DatedSeries, MercatoError>;
}

/// Focused role trait for sources that provide a daily sentiment index.
pub trait SentimentProvider: Send + Sync {
    /// Fetch the sentiment index series.
    ///
    /// # Errors
    /// Failures propagate to the caller; no degraded path is defined for this
    /// source.
    fn sentiment(&self) -> Result<DatedSeries, MercatoError>;
}

/// Focused role trait for sources that provide search-interest series.
pub trait SearchInterestProvider: Send + Sync {
    /// Fetch one series per keyword in a single multi-keyword call.
    ///
    /// The result may include a completeness-marker series named
    /// [`crate::types::PARTIAL_MARKER_COLUMN`]; the aggregation drops it
    /// before the merge.
    ///
    /// # Errors
    /// Returns `Err(MercatoError::Producer)` on call failure.
    fn interest_over_time(
        &self,
        keywords: &[String],
        timeframe: &str,
    ) -> Result<Vec<DatedSeries>, MercatoError>;
}

/// Main source trait implemented by producer crates. Exposes capability
/// discovery.
pub trait DataSource: Send + Sync {
    /// A stable identifier, e.g. "mercato-mock", "mercato-coingecko".
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise market-cap capability by returning a usable trait object
    /// reference when supported.
    fn as_market_cap_provider(&self) -> Option<&dyn MarketCapProvider> {
        None
    }

    /// If implemented, returns a trait object for the macro series.
    fn as_macro_provider(&self) -> Option<&dyn MacroSeriesProvider> {
        None
    }

    /// If implemented, returns a trait object for the sentiment index.
    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        None
    }

    /// If implemented, returns a trait object for search interest.
    fn as_search_interest_provider(&self) -> Option<&dyn SearchInterestProvider> {
        None
    }
}
