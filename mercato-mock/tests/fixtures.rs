use mercato_core::{MarketCapProvider, MercatoError, PARTIAL_MARKER_COLUMN};
use mercato_core::{MacroSeriesProvider, SearchInterestProvider, SentimentProvider};
use mercato_mock::{FAIL_COIN, MockSource, VALID_MACRO_KEY};

#[test]
fn market_caps_are_deterministic() {
    let source = MockSource::new();
    let a = source.market_caps("bitcoin", 30).unwrap();
    let b = source.market_caps("bitcoin", 30).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 30);
}

#[test]
fn fail_coin_triggers_a_producer_error() {
    let err = MockSource::new().market_caps(FAIL_COIN, 30).unwrap_err();
    assert!(matches!(err, MercatoError::Producer { .. }));
}

#[test]
fn unknown_coin_reports_missing_data() {
    let err = MockSource::new().market_caps("dogecoin", 30).unwrap_err();
    assert!(matches!(err, MercatoError::DataUnavailable { .. }));
}

#[test]
fn macro_key_gate() {
    let source = MockSource::new();
    assert!(source.observations("wrong").is_err());
    let series = source.observations(VALID_MACRO_KEY).unwrap();
    assert_eq!(series.name(), source.series_id());
    assert_eq!(series.len(), 12);
}

#[test]
fn sentiment_stays_in_range() {
    let series = MockSource::new().sentiment().unwrap();
    assert!(series.iter().all(|(_, c)| {
        let v = c.as_numeric().unwrap();
        (0.0..=100.0).contains(&v)
    }));
}

#[test]
fn trends_include_the_partial_marker() {
    let keywords = vec!["buy bitcoin".to_string()];
    let series = MockSource::new()
        .interest_over_time(&keywords, "today 12-m")
        .unwrap();
    assert_eq!(series.len(), 2);
    assert!(series.iter().any(|s| s.name() == PARTIAL_MARKER_COLUMN));
    assert!(series.iter().any(|s| s.name() == "buy bitcoin"));
}
