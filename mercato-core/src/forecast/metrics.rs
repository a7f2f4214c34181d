//! Historical-fit error metrics.
//!
//! Both metrics align the observed series and the reconstruction
//! positionally. The two slices must correspond one-to-one; a length mismatch
//! is a programming defect, not a valid state, and panics.

/// Mean absolute error between observed and reconstructed values.
///
/// # Panics
/// Panics when the slices differ in length or are empty.
#[must_use]
pub fn mean_absolute_error(observed: &[f64], reconstructed: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        reconstructed.len(),
        "observed and reconstructed series must align one-to-one"
    );
    assert!(!observed.is_empty(), "metrics need at least one point");
    observed
        .iter()
        .zip(reconstructed)
        .map(|(y, p)| (y - p).abs())
        .sum::<f64>()
        / observed.len() as f64
}

/// Root-mean-squared error between observed and reconstructed values.
///
/// # Panics
/// Panics when the slices differ in length or are empty.
#[must_use]
pub fn root_mean_squared_error(observed: &[f64], reconstructed: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        reconstructed.len(),
        "observed and reconstructed series must align one-to-one"
    );
    assert!(!observed.is_empty(), "metrics need at least one point");
    let mse = observed
        .iter()
        .zip(reconstructed)
        .map(|(y, p)| (y - p).powi(2))
        .sum::<f64>()
        / observed.len() as f64;
    mse.sqrt()
}
