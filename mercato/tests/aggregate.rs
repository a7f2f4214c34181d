use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use mercato::{
    BITCOIN, Cell, DOMINANCE_COLUMN, DataSource, DatedSeries, Mercato, MercatoError,
    PARTIAL_MARKER_COLUMN, TableRequest,
};
use mercato_core::source::{
    MacroSeriesProvider, MarketCapProvider, SearchInterestProvider, SentimentProvider,
};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn daily(name: &str, start: &str, values: &[f64]) -> DatedSeries {
    let start = d(start);
    DatedSeries::from_values(
        name,
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (start + Duration::days(i as i64), *v)),
    )
}

/// Scripted source: every capability serves pre-baked series, with `None`
/// meaning "this producer call fails".
struct ScriptedSource {
    caps: Vec<DatedSeries>,
    macro_series: Option<DatedSeries>,
    sentiment: Option<DatedSeries>,
    search: Vec<DatedSeries>,
}

impl ScriptedSource {
    fn with_coins(caps: Vec<DatedSeries>) -> Self {
        Self {
            caps,
            macro_series: Some(DatedSeries::empty("m2_money_supply")),
            sentiment: Some(daily("fear_greed", "2024-01-01", &[50.0, 55.0])),
            search: vec![],
        }
    }
}

impl DataSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }
    fn as_market_cap_provider(&self) -> Option<&dyn MarketCapProvider> {
        Some(self)
    }
    fn as_macro_provider(&self) -> Option<&dyn MacroSeriesProvider> {
        Some(self)
    }
    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        Some(self)
    }
    fn as_search_interest_provider(&self) -> Option<&dyn SearchInterestProvider> {
        Some(self)
    }
}

impl MarketCapProvider for ScriptedSource {
    fn market_caps(&self, coin: &str, _days: u32) -> Result<DatedSeries, MercatoError> {
        self.caps
            .iter()
            .find(|s| s.name() == coin)
            .cloned()
            .ok_or_else(|| MercatoError::data_unavailable(format!("market caps for {coin}")))
    }
}

impl MacroSeriesProvider for ScriptedSource {
    fn series_id(&self) -> &'static str {
        "m2_money_supply"
    }
    fn observations(&self, _api_key: &str) -> Result<DatedSeries, MercatoError> {
        self.macro_series
            .clone()
            .ok_or_else(|| MercatoError::producer("scripted", "unauthorized macro api key"))
    }
}

impl SentimentProvider for ScriptedSource {
    fn sentiment(&self) -> Result<DatedSeries, MercatoError> {
        self.sentiment
            .clone()
            .ok_or_else(|| MercatoError::producer("scripted", "sentiment endpoint down"))
    }
}

impl SearchInterestProvider for ScriptedSource {
    fn interest_over_time(
        &self,
        _keywords: &[String],
        _timeframe: &str,
    ) -> Result<Vec<DatedSeries>, MercatoError> {
        Ok(self.search.clone())
    }
}

fn orchestrator(source: ScriptedSource) -> Mercato {
    Mercato::builder()
        .with_source(Arc::new(source))
        .build()
        .unwrap()
}

#[test]
fn equal_caps_yield_fifty_percent_dominance() {
    let caps = vec![
        daily(BITCOIN, "2024-01-01", &[100.0; 10]),
        daily("ethereum", "2024-01-01", &[100.0; 10]),
    ];
    let mercato = orchestrator(ScriptedSource::with_coins(caps));
    let table = mercato
        .build_table(&TableRequest::new(["bitcoin", "ethereum"]))
        .unwrap();

    let dom = table.column(DOMINANCE_COLUMN).unwrap();
    assert_eq!(dom.cells().len(), 10);
    for cell in dom.cells() {
        assert_eq!(cell.as_numeric(), Some(50.0));
    }
}

#[test]
fn unauthorized_macro_key_degrades_to_an_empty_column() {
    let caps = vec![
        daily(BITCOIN, "2024-01-01", &[100.0, 110.0]),
        daily("ethereum", "2024-01-01", &[50.0, 60.0]),
    ];
    let mut source = ScriptedSource::with_coins(caps);
    source.macro_series = None; // producer rejects the key
    let mercato = orchestrator(source);

    let table = mercato
        .build_table(&TableRequest::new(["bitcoin", "ethereum"]).macro_key("bad-key"))
        .unwrap();

    let macro_col = table.column("m2_money_supply").unwrap();
    assert!(macro_col.cells().iter().all(Cell::is_missing));
}

#[test]
fn missing_coin_data_aborts_the_aggregation() {
    let caps = vec![daily(BITCOIN, "2024-01-01", &[100.0, 110.0])];
    let mercato = orchestrator(ScriptedSource::with_coins(caps));
    let err = mercato
        .build_table(&TableRequest::new(["bitcoin", "solana"]))
        .unwrap_err();
    assert!(matches!(err, MercatoError::DataUnavailable { .. }));
}

#[test]
fn dominance_requires_bitcoin_in_the_coin_set() {
    let caps = vec![daily("ethereum", "2024-01-01", &[50.0, 60.0])];
    let mercato = orchestrator(ScriptedSource::with_coins(caps));
    let err = mercato
        .build_table(&TableRequest::new(["ethereum"]))
        .unwrap_err();
    assert!(matches!(err, MercatoError::DataUnavailable { .. }));
}

#[test]
fn sentiment_failure_propagates() {
    let caps = vec![daily(BITCOIN, "2024-01-01", &[100.0, 110.0])];
    let mut source = ScriptedSource::with_coins(caps);
    source.sentiment = None;
    let mercato = orchestrator(source);
    let err = mercato
        .build_table(&TableRequest::new(["bitcoin"]))
        .unwrap_err();
    assert!(matches!(err, MercatoError::Producer { .. }));
}

#[test]
fn partial_marker_series_is_stripped_before_merge() {
    let caps = vec![daily(BITCOIN, "2024-01-01", &[100.0, 110.0])];
    let mut source = ScriptedSource::with_coins(caps);
    source.search = vec![
        daily("buy bitcoin", "2024-01-01", &[40.0, 45.0]),
        daily(PARTIAL_MARKER_COLUMN, "2024-01-02", &[1.0]),
    ];
    let mercato = orchestrator(source);
    let table = mercato
        .build_table(&TableRequest::new(["bitcoin"]).keywords(["buy bitcoin"]))
        .unwrap();

    assert!(table.column("buy bitcoin").is_some());
    assert!(table.column(PARTIAL_MARKER_COLUMN).is_none());
}

#[test]
fn empty_coin_list_is_rejected() {
    let mercato = orchestrator(ScriptedSource::with_coins(vec![]));
    let err = mercato
        .build_table(&TableRequest::new(Vec::<String>::new()))
        .unwrap_err();
    assert!(matches!(err, MercatoError::InvalidArg(_)));
}

#[test]
fn gaps_across_sources_are_joined_and_filled() {
    // Coin caps daily, sentiment every third day: the join spans the union
    // and interpolation closes the sentiment gaps.
    let caps = vec![daily(BITCOIN, "2024-01-01", &[100.0, 110.0, 120.0, 130.0, 140.0])];
    let mut source = ScriptedSource::with_coins(caps);
    source.sentiment = Some(DatedSeries::from_values(
        "fear_greed",
        [(d("2024-01-01"), 30.0), (d("2024-01-04"), 60.0)],
    ));
    let mercato = orchestrator(source);
    let table = mercato.build_table(&TableRequest::new(["bitcoin"])).unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(table.numeric_at(d("2024-01-02"), "fear_greed"), Some(40.0));
    assert_eq!(table.numeric_at(d("2024-01-03"), "fear_greed"), Some(50.0));
    // Trailing gap forward-fills from the last observation.
    assert_eq!(table.numeric_at(d("2024-01-05"), "fear_greed"), Some(60.0));
}

#[test]
fn mock_source_end_to_end() {
    let mercato = Mercato::builder()
        .with_source(Arc::new(mercato_mock::MockSource::new()))
        .build()
        .unwrap();
    let req = TableRequest::new(["bitcoin", "ethereum"])
        .macro_key(mercato_mock::VALID_MACRO_KEY)
        .keywords(["buy bitcoin", "ethereum price"])
        .days(120);
    let table = mercato.build_table(&req).unwrap();

    for w in table.dates().windows(2) {
        assert!(w[0] < w[1]);
    }
    for name in ["bitcoin", "ethereum", DOMINANCE_COLUMN, "m2_money_supply", "fear_greed"] {
        assert!(table.column(name).is_some(), "missing column {name}");
    }
    assert!(table.column(PARTIAL_MARKER_COLUMN).is_none());

    // The table round-trips to the exported CSV shape.
    let csv = table.to_csv().unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("date,bitcoin,ethereum,btc_dominance"));
    assert_eq!(csv.lines().count(), table.len() + 1);
}
