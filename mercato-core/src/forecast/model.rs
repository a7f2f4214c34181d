use chrono::{Datelike, NaiveDate};

/// z-score of the 80% central interval.
const Z_80: f64 = 1.281_551_565_5;

/// Minimum historical span, in days, before the weekly component is fit.
/// Below two full cycles the per-weekday means are mostly noise.
const MIN_SEASONAL_SPAN_DAYS: i64 = 14;

/// Additive trend + weekly-seasonal model with a residual uncertainty band.
///
/// `y(d) = intercept + slope * days_since_first(d) + weekday_effect[wd(d)]`,
/// with the band derived from the standard deviation of the fit residuals.
/// The future band widens with the step distance beyond history, since a
/// constant residual band would not reflect growing extrapolation error.
#[derive(Debug, Clone)]
pub struct SeasonalTrendModel {
    first: NaiveDate,
    n: usize,
    intercept: f64,
    slope: f64,
    weekday_effect: [f64; 7],
    sigma: f64,
}

impl SeasonalTrendModel {
    /// Fit the model over cleaned (date, value) pairs in ascending date order.
    ///
    /// # Errors
    /// Returns a message when the input is pathological: a non-finite value,
    /// a degenerate date span, or a diverged trend fit. Callers wrap this in
    /// their column-scoped forecast error.
    pub fn fit(points: &[(NaiveDate, f64)]) -> Result<Self, String> {
        debug_assert!(points.len() >= 2, "fit requires at least two points");
        let n = points.len();
        let first = points[0].0;

        let xs: Vec<f64> = points
            .iter()
            .map(|(d, _)| (*d - first).num_days() as f64)
            .collect();
        let ys: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
        if ys.iter().any(|v| !v.is_finite()) {
            return Err("non-finite value in cleaned history".into());
        }

        let mean_x = xs.iter().sum::<f64>() / n as f64;
        let mean_y = ys.iter().sum::<f64>() / n as f64;
        let var_x: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
        if var_x == 0.0 {
            return Err("all observations share one date; trend is undefined".into());
        }
        let cov: f64 = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();
        let slope = cov / var_x;
        let intercept = mean_y - slope * mean_x;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err("trend fit diverged".into());
        }

        let detrended: Vec<f64> = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| y - (intercept + slope * x))
            .collect();

        let span_days = (points[n - 1].0 - first).num_days();
        let mut weekday_effect = [0.0f64; 7];
        if span_days >= MIN_SEASONAL_SPAN_DAYS {
            let mut sums = [0.0f64; 7];
            let mut counts = [0usize; 7];
            for ((date, _), r) in points.iter().zip(&detrended) {
                let wd = date.weekday().num_days_from_monday() as usize;
                sums[wd] += r;
                counts[wd] += 1;
            }
            let mut observed = 0usize;
            let mut effect_sum = 0.0;
            for wd in 0..7 {
                if counts[wd] > 0 {
                    weekday_effect[wd] = sums[wd] / counts[wd] as f64;
                    effect_sum += weekday_effect[wd];
                    observed += 1;
                }
            }
            // Center over observed weekdays so seasonality carries no net
            // level shift; unobserved weekdays stay neutral.
            if observed > 0 {
                let shift = effect_sum / observed as f64;
                for wd in 0..7 {
                    if counts[wd] > 0 {
                        weekday_effect[wd] -= shift;
                    }
                }
            }
        }

        let residual_sq: f64 = points
            .iter()
            .zip(&detrended)
            .map(|((date, _), r)| {
                let wd = date.weekday().num_days_from_monday() as usize;
                (r - weekday_effect[wd]).powi(2)
            })
            .sum();
        let sigma = (residual_sq / (n - 1) as f64).sqrt();
        if !sigma.is_finite() {
            return Err("residual variance diverged".into());
        }

        Ok(Self {
            first,
            n,
            intercept,
            slope,
            weekday_effect,
            sigma,
        })
    }

    /// Central estimate at `date`.
    #[must_use]
    pub fn predict(&self, date: NaiveDate) -> f64 {
        let x = (date - self.first).num_days() as f64;
        let wd = date.weekday().num_days_from_monday() as usize;
        self.intercept + self.slope * x + self.weekday_effect[wd]
    }

    /// Half-width of the uncertainty band, `steps_ahead` days past the last
    /// observation (0 for the reconstructed history).
    #[must_use]
    pub fn band_half_width(&self, steps_ahead: u32) -> f64 {
        let widen = (1.0 + f64::from(steps_ahead) / self.n as f64).sqrt();
        Z_80 * self.sigma * widen
    }

    /// Standard deviation of the fit residuals.
    #[must_use]
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn daily(start: &str, values: &[f64]) -> Vec<(NaiveDate, f64)> {
        let start = d(start);
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (start + Duration::days(i as i64), *v))
            .collect()
    }

    #[test]
    fn exact_line_has_zero_residuals() {
        let points = daily("2024-01-01", &(1..=30).map(f64::from).collect::<Vec<_>>());
        let model = SeasonalTrendModel::fit(&points).unwrap();
        assert!(model.sigma() < 1e-9);
        let next = model.predict(d("2024-01-31"));
        assert!((next - 31.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_finite_input() {
        let points = vec![(d("2024-01-01"), 1.0), (d("2024-01-02"), f64::INFINITY)];
        assert!(SeasonalTrendModel::fit(&points).is_err());
    }

    #[test]
    fn short_history_disables_seasonality() {
        let points = daily("2024-01-01", &[5.0, 9.0, 4.0, 8.0, 6.0]);
        let model = SeasonalTrendModel::fit(&points).unwrap();
        assert!(model.weekday_effect.iter().all(|e| *e == 0.0));
    }

    #[test]
    fn band_widens_with_horizon_distance() {
        let points = daily("2024-01-01", &[1.0, 3.0, 2.0, 5.0, 4.0, 7.0, 6.0]);
        let model = SeasonalTrendModel::fit(&points).unwrap();
        assert!(model.band_half_width(10) > model.band_half_width(1));
        assert!(model.band_half_width(1) > model.band_half_width(0));
    }
}
