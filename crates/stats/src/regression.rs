//! Ordinary least-squares line fitting.

/// A fitted line `y = intercept + slope * x`.
///
/// Both fields are `NaN` when the fit is undefined (fewer than two usable
/// points, or all `x` identical).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change in `y` per unit of `x`.
    pub slope: f64,
    /// Value of `y` at `x = 0`.
    pub intercept: f64,
}

impl LinearFit {
    /// A fit with both parameters undefined.
    pub fn undefined() -> Self {
        Self {
            slope: f64::NAN,
            intercept: f64::NAN,
        }
    }

    /// Returns `true` if both slope and intercept are finite.
    pub fn is_defined(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }

    /// Evaluates the line at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Slope scaled from per-year to per-century.
    pub fn per_century(&self) -> f64 {
        self.slope * 100.0
    }
}

/// Fits `y = intercept + slope * x` by ordinary least squares.
///
/// Pairs where either coordinate is non-finite are skipped. Returns
/// [`LinearFit::undefined`] if fewer than two pairs remain or `x` has zero
/// variance.
pub fn linear_regression(x: &[f64], y: &[f64]) -> LinearFit {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 2 {
        return LinearFit::undefined();
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        sum_xy += dx * (yi - my);
        sum_xx += dx * dx;
    }

    if sum_xx == 0.0 {
        return LinearFit::undefined();
    }

    let slope = sum_xy / sum_xx;
    LinearFit {
        slope,
        intercept: my - slope * mx,
    }
}
