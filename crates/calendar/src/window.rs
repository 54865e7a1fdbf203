//! Time-of-year window selection.
//!
//! A time-of-year window is the set of day-of-year values that count as "the
//! same time of year" as an anchor date. The window is built by sampling
//! evenly spaced dates between `anchor - half_width` and `anchor + half_width`
//! and taking the day-of-year of every sample. Because the day-of-year is
//! computed per sampled date, windows that straddle New Year pick up both
//! late-December and early-January values without any modular arithmetic.

use chrono::{Days, NaiveDate};

use crate::doy::Doy;

/// Default half-width of the window in days.
pub const DEFAULT_HALF_WIDTH_DAYS: u16 = 7;

/// Default number of sample points across the window.
pub const DEFAULT_WINDOW_POINTS: usize = 15;

/// The set of day-of-year values within a window around an anchor date.
///
/// Never empty: the anchor's own day-of-year is always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToyWindow {
    anchor: NaiveDate,
    days: Vec<Doy>,
}

impl ToyWindow {
    /// Builds the window around `anchor`.
    ///
    /// `n_points` evenly spaced dates are sampled over
    /// `[anchor - half_width_days, anchor + half_width_days]`, both ends
    /// inclusive. With `half_width_days = 7` and `n_points = 15` this is
    /// exactly one sample per day.
    pub fn around(anchor: NaiveDate, half_width_days: u16, n_points: usize) -> Self {
        let width = Days::new(u64::from(half_width_days));
        let start = anchor.checked_sub_days(width).unwrap_or(anchor);
        let end = anchor.checked_add_days(width).unwrap_or(anchor);

        let mut days: Vec<Doy> = sample_dates(start, end, n_points)
            .into_iter()
            .map(Doy::of)
            .collect();
        days.push(Doy::of(anchor));
        days.sort_unstable();
        days.dedup();

        Self { anchor, days }
    }

    /// Builds the window with the default ±7 day, 15 point sampling.
    pub fn with_defaults(anchor: NaiveDate) -> Self {
        Self::around(anchor, DEFAULT_HALF_WIDTH_DAYS, DEFAULT_WINDOW_POINTS)
    }

    /// Returns the anchor date the window was built around.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Returns the member day-of-year values, sorted ascending.
    pub fn days(&self) -> &[Doy] {
        &self.days
    }

    /// Returns `true` if `doy` belongs to the window.
    pub fn contains(&self, doy: Doy) -> bool {
        self.days.binary_search(&doy).is_ok()
    }

    /// Returns the number of distinct day-of-year values in the window.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Samples `n_points` evenly spaced dates from `start` to `end`, inclusive.
///
/// Sample `i` lies at `start + i * span / (n_points - 1)` days, floored to a
/// whole day. Fewer than two points yields `[start]`; an inverted range
/// yields `[start]` as well.
pub fn sample_dates(start: NaiveDate, end: NaiveDate, n_points: usize) -> Vec<NaiveDate> {
    let span = (end - start).num_days();
    if n_points < 2 || span < 0 {
        return vec![start];
    }
    let intervals = (n_points - 1) as i64;
    (0..n_points as i64)
        .filter_map(|i| {
            let offset = (i * span) / intervals;
            start.checked_add_days(Days::new(offset as u64))
        })
        .collect()
}
