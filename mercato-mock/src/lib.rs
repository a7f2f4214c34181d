//! Mock mercato data source for CI-safe examples and tests.
//!
//! Provides deterministic data from synthetic fixtures; no network, no
//! randomness. Special trigger values reproduce failure modes:
//! - coin `"FAIL"` makes the market-cap call fail outright;
//! - any coin without a fixture reports missing market-cap data;
//! - any macro key other than [`VALID_MACRO_KEY`] is rejected as
//!   unauthorized, which the orchestrator degrades to an empty column.

use mercato_core::{
    DataSource, DatedSeries, MacroSeriesProvider, MarketCapProvider, MercatoError,
    SearchInterestProvider, SentimentProvider,
};

mod fixtures;

/// The only macro access key the mock accepts.
pub const VALID_MACRO_KEY: &str = "demo";

/// Coin identifier that forces a producer failure.
pub const FAIL_COIN: &str = "FAIL";

/// Mock data source backed by deterministic fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create the mock source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DataSource for MockSource {
    fn name(&self) -> &'static str {
        "mercato-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_market_cap_provider(&self) -> Option<&dyn MarketCapProvider> {
        Some(self as &dyn MarketCapProvider)
    }
    fn as_macro_provider(&self) -> Option<&dyn MacroSeriesProvider> {
        Some(self as &dyn MacroSeriesProvider)
    }
    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        Some(self as &dyn SentimentProvider)
    }
    fn as_search_interest_provider(&self) -> Option<&dyn SearchInterestProvider> {
        Some(self as &dyn SearchInterestProvider)
    }
}

impl MarketCapProvider for MockSource {
    fn market_caps(&self, coin: &str, days: u32) -> Result<DatedSeries, MercatoError> {
        if coin == FAIL_COIN {
            return Err(MercatoError::producer(
                "mercato-mock",
                "forced failure: market_caps",
            ));
        }
        fixtures::market_caps::by_coin(coin, days)
            .ok_or_else(|| MercatoError::data_unavailable(format!("market caps for {coin}")))
    }
}

impl MacroSeriesProvider for MockSource {
    fn series_id(&self) -> &'static str {
        "m2_money_supply"
    }

    fn observations(&self, api_key: &str) -> Result<DatedSeries, MercatoError> {
        if api_key != VALID_MACRO_KEY {
            return Err(MercatoError::producer(
                "mercato-mock",
                "unauthorized macro api key",
            ));
        }
        Ok(fixtures::macro_series::monthly(self.series_id()))
    }
}

impl SentimentProvider for MockSource {
    fn sentiment(&self) -> Result<DatedSeries, MercatoError> {
        Ok(fixtures::sentiment::daily())
    }
}

impl SearchInterestProvider for MockSource {
    fn interest_over_time(
        &self,
        keywords: &[String],
        _timeframe: &str,
    ) -> Result<Vec<DatedSeries>, MercatoError> {
        Ok(fixtures::trends::weekly(keywords))
    }
}
