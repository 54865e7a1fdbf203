//! Percentile-of-score and quantiles over a reference distribution.

use crate::{drop_nan, quantile_type7};

/// Percentile rank (0..=100) of `score` within `distribution`.
///
/// Uses the "mean" definition: the average of the strict rank
/// (`count(x < score)`) and the weak rank (`count(x <= score)`), scaled to
/// 100. `NaN` entries of the distribution are omitted.
///
/// Returns `NaN` if `score` is `NaN` or the distribution has no non-`NaN`
/// values.
///
/// # Example
///
/// ```
/// use isithot_stats::percentile_of_score;
///
/// let dist = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_of_score(&dist, 3.0), 62.5);
/// ```
pub fn percentile_of_score(distribution: &[f64], score: f64) -> f64 {
    if score.is_nan() {
        return f64::NAN;
    }
    let mut n = 0usize;
    let mut below = 0usize;
    let mut at_or_below = 0usize;
    for &x in distribution.iter().filter(|x| !x.is_nan()) {
        n += 1;
        if x < score {
            below += 1;
        }
        if x <= score {
            at_or_below += 1;
        }
    }
    if n == 0 {
        return f64::NAN;
    }
    (below + at_or_below) as f64 * 50.0 / n as f64
}

/// Linear-interpolated quantile `q` (0..=1) of the non-`NaN` values.
///
/// Returns `NaN` if no values remain or `q` is outside `[0, 1]`.
pub fn quantile(data: &[f64], q: f64) -> f64 {
    let mut sorted = drop_nan(data);
    sorted.sort_by(f64::total_cmp);
    quantile_type7(&sorted, q)
}
