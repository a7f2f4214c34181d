//! Per-column probabilistic forecasting over an aligned table.
//!
//! The model is additive (trend + weekly seasonality) with a residual-based
//! uncertainty band: the series this core handles mix trend with irregular
//! seasonality, and downstream display/alerting consumes a confidence band,
//! not just a point estimate. Each call fits fresh; nothing is cached.

/// Fit-error metrics over the observed-history overlap.
pub mod metrics;
/// The additive trend + seasonal model.
pub mod model;

use chrono::Duration;

use crate::MercatoError;
use crate::types::{AlignedTable, Forecast, ForecastPoint};
use model::SeasonalTrendModel;

/// Forecast one named column of an aligned table `horizon` days ahead.
///
/// Preprocessing drops missing cells, strictly coerces the rest, and drops
/// coercion failures. The returned trajectory holds one point per surviving
/// observation (the reconstructed history) followed by exactly `horizon`
/// consecutive daily dates strictly after the last observation. MAE and RMSE
/// are computed only over the observed-history overlap.
///
/// # Errors
/// - `MercatoError::InvalidArg` when `horizon` is zero.
/// - `MercatoError::InsufficientData` when fewer than 2 usable points remain
///   (an unknown column name counts as zero points).
/// - `MercatoError::Forecast` when the fit itself fails, e.g. on pathological
///   numeric input.
pub fn forecast(
    table: &AlignedTable,
    column: &str,
    horizon: u32,
) -> Result<Forecast, MercatoError> {
    if horizon == 0 {
        return Err(MercatoError::InvalidArg(
            "horizon must be a positive number of days".into(),
        ));
    }

    let cleaned = table.numeric_series(column);
    let n = cleaned.len();
    if n < 2 {
        return Err(MercatoError::insufficient_data(column, n));
    }

    let model =
        SeasonalTrendModel::fit(&cleaned).map_err(|msg| MercatoError::forecast(column, msg))?;

    let mut points = Vec::with_capacity(n + horizon as usize);
    for (date, _) in &cleaned {
        let yhat = model.predict(*date);
        let half = model.band_half_width(0);
        points.push(ForecastPoint {
            date: *date,
            yhat,
            yhat_lower: yhat - half,
            yhat_upper: yhat + half,
        });
    }

    let last = cleaned[n - 1].0;
    for step in 1..=horizon {
        let date = last + Duration::days(i64::from(step));
        let yhat = model.predict(date);
        let half = model.band_half_width(step);
        points.push(ForecastPoint {
            date,
            yhat,
            yhat_lower: yhat - half,
            yhat_upper: yhat + half,
        });
    }

    // The reconstruction at dates <= the last observation corresponds
    // one-to-one with the cleaned history; metrics cover exactly that overlap.
    let observed: Vec<f64> = cleaned.iter().map(|(_, v)| *v).collect();
    let reconstructed: Vec<f64> = points[..n].iter().map(|p| p.yhat).collect();
    let mae = metrics::mean_absolute_error(&observed, &reconstructed);
    let rmse = metrics::root_mean_squared_error(&observed, &reconstructed);

    Ok(Forecast {
        points,
        mae,
        rmse,
        horizon,
    })
}
