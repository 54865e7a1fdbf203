//! Pipeline configuration.

use isithot_calendar::{DEFAULT_HALF_WIDTH_DAYS, DEFAULT_WINDOW_POINTS};

use crate::error::ClimatologyError;
use crate::reading::ReadingPolicy;

/// Configuration for the climatology pipeline.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use isithot_climatology::{ClimatologyConfig, ReadingPolicy};
///
/// let config = ClimatologyConfig::new()
///     .with_reading_policy(ReadingPolicy::Mean)
///     .with_hot_threshold(20.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClimatologyConfig {
    window_half_width_days: u16,
    window_points: usize,
    reading_policy: ReadingPolicy,
    hot_threshold: f64,
    density_points: usize,
}

impl ClimatologyConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `window_half_width_days = 7`, `window_points = 15`,
    /// `reading_policy = MinMaxAverage`, `hot_threshold = 15.0`,
    /// `density_points = 200`.
    pub fn new() -> Self {
        Self {
            window_half_width_days: DEFAULT_HALF_WIDTH_DAYS,
            window_points: DEFAULT_WINDOW_POINTS,
            reading_policy: ReadingPolicy::MinMaxAverage,
            hot_threshold: 15.0,
            density_points: 200,
        }
    }

    /// Sets the time-of-year window half-width (plus/minus days).
    pub fn with_window_half_width(mut self, days: u16) -> Self {
        self.window_half_width_days = days;
        self
    }

    /// Sets the number of sample points across the window.
    pub fn with_window_points(mut self, n: usize) -> Self {
        self.window_points = n;
        self
    }

    /// Sets how today's sub-daily readings are reduced to one value.
    pub fn with_reading_policy(mut self, policy: ReadingPolicy) -> Self {
        self.reading_policy = policy;
        self
    }

    /// Sets the temperature above which a warm day is called hot.
    pub fn with_hot_threshold(mut self, threshold: f64) -> Self {
        self.hot_threshold = threshold;
        self
    }

    /// Sets the number of points of the density curve.
    pub fn with_density_points(mut self, n: usize) -> Self {
        self.density_points = n;
        self
    }

    // --- Accessors ---

    /// Returns the window half-width in days.
    pub fn window_half_width_days(&self) -> u16 {
        self.window_half_width_days
    }

    /// Returns the number of window sample points.
    pub fn window_points(&self) -> usize {
        self.window_points
    }

    /// Returns the current-reading policy.
    pub fn reading_policy(&self) -> ReadingPolicy {
        self.reading_policy
    }

    /// Returns the hot/warm threshold.
    pub fn hot_threshold(&self) -> f64 {
        self.hot_threshold
    }

    /// Returns the number of density curve points.
    pub fn density_points(&self) -> usize {
        self.density_points
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ClimatologyError> {
        if self.window_half_width_days > 182 {
            return Err(ClimatologyError::InvalidConfig {
                reason: format!(
                    "window_half_width_days must be <= 182, got {}",
                    self.window_half_width_days
                ),
            });
        }
        if self.window_points < 2 && self.window_half_width_days > 0 {
            return Err(ClimatologyError::InvalidConfig {
                reason: format!(
                    "window_points must be >= 2 for a non-zero window, got {}",
                    self.window_points
                ),
            });
        }
        if self.window_points == 0 {
            return Err(ClimatologyError::InvalidConfig {
                reason: "window_points must be >= 1".to_string(),
            });
        }
        if !self.hot_threshold.is_finite() {
            return Err(ClimatologyError::InvalidConfig {
                reason: format!("hot_threshold must be finite, got {}", self.hot_threshold),
            });
        }
        if self.density_points < 2 {
            return Err(ClimatologyError::InvalidConfig {
                reason: format!(
                    "density_points must be >= 2, got {}",
                    self.density_points
                ),
            });
        }
        Ok(())
    }
}

impl Default for ClimatologyConfig {
    fn default() -> Self {
        Self::new()
    }
}
