use mercato_core::{AlignedTable, Forecast, MercatoError};

use crate::core::Mercato;

impl Mercato {
    /// Forecast one column of an aligned table `horizon` days ahead.
    ///
    /// Any positive horizon is accepted; presentation layers conventionally
    /// offer 7, 14, 30, or 60 days. Each call fits fresh on the column's
    /// cleaned history and returns the reconstructed trajectory with an
    /// uncertainty band plus MAE/RMSE over the observed overlap.
    ///
    /// # Errors
    /// See [`mercato_core::forecast`]: `InvalidArg`, `InsufficientData`, or
    /// `Forecast`, all scoped to this one column.
    pub fn forecast(
        &self,
        table: &AlignedTable,
        column: &str,
        horizon: u32,
    ) -> Result<Forecast, MercatoError> {
        mercato_core::forecast(table, column, horizon)
    }

    /// Forecast several columns independently.
    ///
    /// Failures are isolated per column: a column with too little or
    /// pathological data yields its own error entry and never blocks the
    /// remaining columns.
    pub fn forecast_each(
        &self,
        table: &AlignedTable,
        columns: &[String],
        horizon: u32,
    ) -> Vec<(String, Result<Forecast, MercatoError>)> {
        columns
            .iter()
            .map(|column| {
                let result = self.forecast(table, column, horizon);
                if let Err(err) = &result {
                    tracing::warn!(column, error = %err, "column forecast failed; continuing");
                }
                (column.clone(), result)
            })
            .collect()
    }
}
