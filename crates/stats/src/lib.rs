//! Statistical helper functions for the isithot climatology pipeline.
//!
//! Every function here is total: empty or degenerate input yields `NaN`
//! (or `None`/an empty result) rather than a panic or an error, so that
//! "no data yet" conditions flow through the pipeline as values.
//!
//! `NaN` entries in the input are omitted by every function in this crate.

mod kde;
mod percentile;
mod regression;

pub use kde::{GaussianKde, linspace};
pub use percentile::{percentile_of_score, quantile};
pub use regression::{LinearFit, linear_regression};

/// Returns the non-`NaN` values of `data`, in their original order.
pub fn drop_nan(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Arithmetic mean of the non-`NaN` values of a slice. Returns `NaN` if there
/// are none.
pub fn nan_mean(data: &[f64]) -> f64 {
    let (sum, n) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        return f64::NAN;
    }
    sum / n as f64
}

/// Sample variance with N-1 denominator over the non-`NaN` values.
/// Returns `NaN` if fewer than 2 values remain.
pub fn variance(data: &[f64]) -> f64 {
    let values = drop_nan(data);
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    values.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator over the non-`NaN` values.
/// Returns `NaN` if fewer than 2 values remain.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Minimum of the non-`NaN` values. Returns `NaN` if there are none.
pub fn nan_min(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

/// Maximum of the non-`NaN` values. Returns `NaN` if there are none.
pub fn nan_max(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

/// Linear-interpolated quantile (R type 7) of **pre-sorted**, `NaN`-free data.
///
/// Returns `NaN` if `sorted` is empty or `p` is outside `[0, 1]`.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of the non-`NaN` values. Returns `NaN` if there are none.
pub fn median(data: &[f64]) -> f64 {
    quantile(data, 0.5)
}
