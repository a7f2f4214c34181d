use thiserror::Error;

/// Unified error type for the mercato workspace.
///
/// This wraps missing required upstream data, producer call failures,
/// capability mismatches, and the per-column forecasting failure modes.
#[derive(Debug, Error)]
pub enum MercatoError {
    /// A required upstream source omitted expected data. Fatal to the whole
    /// aggregation; no partial table is ever returned.
    #[error("data unavailable: {what}")]
    DataUnavailable {
        /// Description of the missing data, e.g. "market caps for solana".
        what: String,
    },

    /// An individual data producer call failed outright.
    #[error("{producer} failed: {msg}")]
    Producer {
        /// Producer name that failed.
        producer: String,
        /// Human-readable error message.
        msg: String,
    },

    /// No registered source advertises the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "market_caps").
        capability: &'static str,
    },

    /// Fewer than two usable points remained after cleaning a column.
    /// Fatal to that one column's forecast only.
    #[error("insufficient data for {column}: {points} usable point(s), need at least 2")]
    InsufficientData {
        /// The column that could not be forecast.
        column: String,
        /// How many usable (date, value) pairs survived cleaning.
        points: usize,
    },

    /// The fitting procedure itself failed, e.g. on pathological numeric
    /// input. Fatal to that one column's forecast only.
    #[error("forecast failed for {column}: {msg}")]
    Forecast {
        /// The column whose fit failed.
        column: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// CSV export of the aligned table failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl MercatoError {
    /// Helper: build a `DataUnavailable` error for a description of the missing data.
    pub fn data_unavailable(what: impl Into<String>) -> Self {
        Self::DataUnavailable { what: what.into() }
    }

    /// Helper: build a `Producer` error with the producer name and message.
    pub fn producer(producer: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Producer {
            producer: producer.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build an `InsufficientData` error for a column.
    pub fn insufficient_data(column: impl Into<String>, points: usize) -> Self {
        Self::InsufficientData {
            column: column.into(),
            points,
        }
    }

    /// Helper: build a `Forecast` error for a column.
    pub fn forecast(column: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Forecast {
            column: column.into(),
            msg: msg.into(),
        }
    }
}
