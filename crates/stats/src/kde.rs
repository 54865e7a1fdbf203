//! Gaussian kernel density estimation.

use std::f64::consts::PI;

use crate::{drop_nan, sd};

/// Univariate Gaussian kernel density estimate with Scott's bandwidth.
///
/// The bandwidth is `sd * n^(-1/5)` where `sd` is the sample standard
/// deviation (N-1 denominator) of the data.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    data: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Builds an estimator from the non-`NaN` values of `data`.
    ///
    /// Returns `None` if fewer than two values remain or the values have
    /// zero spread, since no bandwidth can be chosen.
    pub fn new(data: &[f64]) -> Option<Self> {
        let data = drop_nan(data);
        if data.len() < 2 {
            return None;
        }
        let spread = sd(&data);
        if !spread.is_finite() || spread <= 0.0 {
            return None;
        }
        let bandwidth = spread * (data.len() as f64).powf(-0.2);
        Some(Self { data, bandwidth })
    }

    /// Returns the kernel bandwidth.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluates the density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.data.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        self.data
            .iter()
            .map(|&xi| {
                let z = (x - xi) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }
}

/// Returns `n` evenly spaced values from `start` to `end`, inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
