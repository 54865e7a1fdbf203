//! Narrative categories derived from the current-reading percentile.
//!
//! The classifiers return language-neutral enums. [`key`](YesNo::key) gives a
//! stable identifier for translation catalogues and `Display` renders the
//! default English phrase.

use std::fmt;

/// Percentile band used by both narrative classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PercentileBand {
    /// `[0, 5)`
    ExtremelyLow,
    /// `[5, 10)`
    VeryLow,
    /// `[10, 40)`
    Low,
    /// `[40, 50)`
    BelowMedian,
    /// `[50, 60)`
    AboveMedian,
    /// `[60, 90)`
    High,
    /// `[90, 95)`
    VeryHigh,
    /// `[95, 100]`
    ExtremelyHigh,
}

/// Bands as `(lower inclusive, upper exclusive, band)`; the last upper bound
/// is inclusive.
const BANDS: [(f64, f64, PercentileBand); 8] = [
    (0.0, 5.0, PercentileBand::ExtremelyLow),
    (5.0, 10.0, PercentileBand::VeryLow),
    (10.0, 40.0, PercentileBand::Low),
    (40.0, 50.0, PercentileBand::BelowMedian),
    (50.0, 60.0, PercentileBand::AboveMedian),
    (60.0, 90.0, PercentileBand::High),
    (90.0, 95.0, PercentileBand::VeryHigh),
    (95.0, 100.0, PercentileBand::ExtremelyHigh),
];

impl PercentileBand {
    /// Returns the band containing `percentile`, or `None` for `NaN` and
    /// values outside `[0, 100]`.
    pub fn of(percentile: f64) -> Option<Self> {
        if percentile.is_nan() {
            return None;
        }
        let last = BANDS.len() - 1;
        BANDS
            .iter()
            .enumerate()
            .find(|&(i, &(lo, hi, _))| {
                percentile >= lo && (percentile < hi || (i == last && percentile <= hi))
            })
            .map(|(_, &(_, _, band))| band)
    }
}

/// Short answer to "is it hot?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    HellNo,
    No,
    Nope,
    NotReally,
    Yup,
    Yeah,
    HellYeah,
    BloodyHellYes,
    /// The percentile is undefined.
    NoData,
}

impl YesNo {
    /// Stable identifier of the category.
    pub fn key(self) -> &'static str {
        match self {
            Self::HellNo => "hell_no",
            Self::No => "no",
            Self::Nope => "nope",
            Self::NotReally => "not_really",
            Self::Yup => "yup",
            Self::Yeah => "yeah",
            Self::HellYeah => "hell_yeah",
            Self::BloodyHellYes => "bloody_hell_yes",
            Self::NoData => "no_data",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HellNo => "Hell no!",
            Self::No => "No!",
            Self::Nope => "Nope",
            Self::NotReally => "Not really",
            Self::Yup => "Yup",
            Self::Yeah => "Yeah!",
            Self::HellYeah => "Hell yeah!",
            Self::BloodyHellYes => "Bloody hell yes!",
            Self::NoData => "not sure, we have no data yet",
        })
    }
}

/// Whether a warm day counts as hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotWarm {
    Hot,
    Warm,
}

impl HotWarm {
    /// Stable identifier of the category.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
        }
    }
}

impl fmt::Display for HotWarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Longer comparison of today with the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvgCompare {
    BloodyCold,
    ReallyCold,
    KindaCool,
    AboutAverage,
    WarmerThanAverage,
    Quite(HotWarm),
    Really(HotWarm),
    Bloody(HotWarm),
    /// The percentile is undefined.
    NoData,
}

impl AvgCompare {
    /// Stable identifier of the category.
    pub fn key(self) -> &'static str {
        match self {
            Self::BloodyCold => "bloody_cold",
            Self::ReallyCold => "really_cold",
            Self::KindaCool => "kinda_cool",
            Self::AboutAverage => "about_average",
            Self::WarmerThanAverage => "warmer_than_average",
            Self::Quite(HotWarm::Hot) => "quite_hot",
            Self::Quite(HotWarm::Warm) => "quite_warm",
            Self::Really(HotWarm::Hot) => "really_hot",
            Self::Really(HotWarm::Warm) => "really_warm",
            Self::Bloody(HotWarm::Hot) => "bloody_hot",
            Self::Bloody(HotWarm::Warm) => "bloody_warm",
            Self::NoData => "no_data",
        }
    }
}

impl fmt::Display for AvgCompare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BloodyCold => f.write_str("Are you kidding?! It's bloody cold"),
            Self::ReallyCold => f.write_str("It's actually really cold"),
            Self::KindaCool => f.write_str("It's actually kinda cool"),
            Self::AboutAverage => f.write_str("It's about average"),
            Self::WarmerThanAverage => f.write_str("It's warmer than average"),
            Self::Quite(hw) => write!(f, "It's quite {hw}!"),
            Self::Really(hw) => write!(f, "It's really {hw}!"),
            Self::Bloody(hw) => write!(f, "It's bloody {hw}!"),
            Self::NoData => f.write_str("could be hotter, could be cooler"),
        }
    }
}

/// Classifies `percentile` into a short yes/no answer.
pub fn yes_no(percentile: f64) -> YesNo {
    match PercentileBand::of(percentile) {
        Some(PercentileBand::ExtremelyLow) => YesNo::HellNo,
        Some(PercentileBand::VeryLow) => YesNo::No,
        Some(PercentileBand::Low) => YesNo::Nope,
        Some(PercentileBand::BelowMedian) => YesNo::NotReally,
        Some(PercentileBand::AboveMedian) => YesNo::Yup,
        Some(PercentileBand::High) => YesNo::Yeah,
        Some(PercentileBand::VeryHigh) => YesNo::HellYeah,
        Some(PercentileBand::ExtremelyHigh) => YesNo::BloodyHellYes,
        None => YesNo::NoData,
    }
}

/// Hot when `current_avg` exceeds `threshold`, warm otherwise (including `NaN`).
pub fn hot_warm(current_avg: f64, threshold: f64) -> HotWarm {
    if current_avg > threshold {
        HotWarm::Hot
    } else {
        HotWarm::Warm
    }
}

/// Classifies `percentile` into a comparison with the average; the upper
/// bands are qualified by [`hot_warm`].
pub fn avg_compare(percentile: f64, current_avg: f64, threshold: f64) -> AvgCompare {
    let hw = || hot_warm(current_avg, threshold);
    match PercentileBand::of(percentile) {
        Some(PercentileBand::ExtremelyLow) => AvgCompare::BloodyCold,
        Some(PercentileBand::VeryLow) => AvgCompare::ReallyCold,
        Some(PercentileBand::Low) => AvgCompare::KindaCool,
        Some(PercentileBand::BelowMedian) => AvgCompare::AboutAverage,
        Some(PercentileBand::AboveMedian) => AvgCompare::WarmerThanAverage,
        Some(PercentileBand::High) => AvgCompare::Quite(hw()),
        Some(PercentileBand::VeryHigh) => AvgCompare::Really(hw()),
        Some(PercentileBand::ExtremelyHigh) => AvgCompare::Bloody(hw()),
        None => AvgCompare::NoData,
    }
}
