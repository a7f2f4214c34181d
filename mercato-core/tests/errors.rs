use mercato_core::MercatoError;

#[test]
fn display_messages_are_stable() {
    assert_eq!(
        MercatoError::data_unavailable("market caps for solana").to_string(),
        "data unavailable: market caps for solana"
    );
    assert_eq!(
        MercatoError::producer("mercato-mock", "http 500").to_string(),
        "mercato-mock failed: http 500"
    );
    assert_eq!(
        MercatoError::unsupported("market_caps").to_string(),
        "unsupported capability: market_caps"
    );
    assert_eq!(
        MercatoError::insufficient_data("btc_dominance", 1).to_string(),
        "insufficient data for btc_dominance: 1 usable point(s), need at least 2"
    );
    assert_eq!(
        MercatoError::forecast("bitcoin", "trend fit diverged").to_string(),
        "forecast failed for bitcoin: trend fit diverged"
    );
    assert_eq!(
        MercatoError::InvalidArg("horizon must be a positive number of days".into()).to_string(),
        "invalid argument: horizon must be a positive number of days"
    );
}

#[test]
fn helpers_build_the_expected_variants() {
    assert!(matches!(
        MercatoError::data_unavailable("x"),
        MercatoError::DataUnavailable { .. }
    ));
    assert!(matches!(
        MercatoError::producer("p", "m"),
        MercatoError::Producer { .. }
    ));
    assert!(matches!(
        MercatoError::insufficient_data("c", 0),
        MercatoError::InsufficientData { points: 0, .. }
    ));
}
