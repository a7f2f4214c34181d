use std::sync::Arc;

use mercato_core::source::{
    MacroSeriesProvider, MarketCapProvider, SearchInterestProvider, SentimentProvider,
};
use mercato_core::{DataSource, MercatoError};

/// Orchestrator that aggregates registered data sources into aligned tables
/// and forecasts.
pub struct Mercato {
    pub(crate) sources: Vec<Arc<dyn DataSource>>,
}

/// Builder for constructing a `Mercato` orchestrator.
pub struct MercatoBuilder {
    sources: Vec<Arc<dyn DataSource>>,
}

impl Default for MercatoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MercatoBuilder {
    /// Create a new builder with no registered sources.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: vec![] }
    }

    /// Register a data source.
    ///
    /// Behavior and trade-offs:
    /// - Registration order matters: the first source advertising a
    ///   capability serves every request for it. There is no fallback or
    ///   retry; each aggregation performs one attempt per source.
    /// - One source may cover all four capabilities, or each capability may
    ///   come from a different source.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn DataSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Returns `Err(MercatoError::InvalidArg)` when no source was registered.
    pub fn build(self) -> Result<Mercato, MercatoError> {
        if self.sources.is_empty() {
            return Err(MercatoError::InvalidArg(
                "at least one data source must be registered".into(),
            ));
        }
        Ok(Mercato {
            sources: self.sources,
        })
    }
}

impl Mercato {
    /// Start building an orchestrator.
    #[must_use]
    pub fn builder() -> MercatoBuilder {
        MercatoBuilder::new()
    }

    pub(crate) fn market_cap_provider(&self) -> Result<&dyn MarketCapProvider, MercatoError> {
        self.sources
            .iter()
            .find_map(|s| s.as_market_cap_provider())
            .ok_or(MercatoError::unsupported("market_caps"))
    }

    pub(crate) fn macro_provider(&self) -> Result<&dyn MacroSeriesProvider, MercatoError> {
        self.sources
            .iter()
            .find_map(|s| s.as_macro_provider())
            .ok_or(MercatoError::unsupported("macro_series"))
    }

    pub(crate) fn sentiment_provider(&self) -> Result<&dyn SentimentProvider, MercatoError> {
        self.sources
            .iter()
            .find_map(|s| s.as_sentiment_provider())
            .ok_or(MercatoError::unsupported("sentiment"))
    }

    pub(crate) fn search_interest_provider(
        &self,
    ) -> Result<&dyn SearchInterestProvider, MercatoError> {
        self.sources
            .iter()
            .find_map(|s| s.as_search_interest_provider())
            .ok_or(MercatoError::unsupported("search_interest"))
    }
}
