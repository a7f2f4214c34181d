use mercato_core::{
    AlignedTable, DatedSeries, MercatoError, PARTIAL_MARKER_COLUMN, TableRequest, dominance,
    interpolate_then_ffill, outer_join,
};

use crate::core::Mercato;

impl Mercato {
    /// Aggregate all sources into one aligned daily table.
    ///
    /// Sources are fetched sequentially, one call per coin then one per
    /// auxiliary source, each a single blocking attempt:
    /// - a failed or incomplete coin fetch aborts the whole aggregation (no
    ///   partial coin set ever proceeds, since dominance and comparisons
    ///   depend on the full requested set);
    /// - dominance is derived only after every coin series, including
    ///   bitcoin's, has completed;
    /// - a failed macro fetch degrades to an empty column with a warning;
    /// - a failed sentiment fetch propagates;
    /// - the search producer's completeness marker is stripped before merge.
    ///
    /// The joined rows span the union of all dates, ascending; gaps are
    /// closed per column by linear interpolation, then forward fill.
    ///
    /// # Errors
    /// - `MercatoError::InvalidArg` for an empty coin list.
    /// - `MercatoError::Unsupported` when no registered source advertises a
    ///   needed capability.
    /// - `MercatoError::DataUnavailable` when a required coin series (or
    ///   bitcoin itself, required for dominance) is missing.
    /// - `MercatoError::Producer` when a required producer call fails.
    pub fn build_table(&self, req: &TableRequest) -> Result<AlignedTable, MercatoError> {
        if req.coins.is_empty() {
            return Err(MercatoError::InvalidArg(
                "at least one coin is required".into(),
            ));
        }

        let caps = self.market_cap_provider()?;
        let mut coin_series = Vec::with_capacity(req.coins.len());
        for coin in &req.coins {
            coin_series.push(caps.market_caps(coin, req.days)?);
        }
        let dominance_series = dominance(&coin_series)?;

        let macro_provider = self.macro_provider()?;
        let macro_series = match &req.macro_key {
            Some(key) => match macro_provider.observations(key) {
                Ok(series) => series,
                Err(err) => {
                    tracing::warn!(
                        series = macro_provider.series_id(),
                        error = %err,
                        "macro source degraded; merging an empty series"
                    );
                    DatedSeries::empty(macro_provider.series_id())
                }
            },
            None => DatedSeries::empty(macro_provider.series_id()),
        };

        let sentiment = self.sentiment_provider()?.sentiment()?;

        let mut search_series = if req.keywords.is_empty() {
            Vec::new()
        } else {
            self.search_interest_provider()?
                .interest_over_time(&req.keywords, &req.trends_timeframe)?
        };
        search_series.retain(|s| s.name() != PARTIAL_MARKER_COLUMN);

        let mut all = coin_series;
        all.push(dominance_series);
        all.push(macro_series);
        all.push(sentiment);
        all.extend(search_series);

        let mut table = outer_join(all);
        interpolate_then_ffill(&mut table);
        tracing::debug!(
            rows = table.len(),
            columns = table.column_names().count(),
            "aggregated table built"
        );
        Ok(table)
    }
}
