use isithot_climatology::{AvgCompare, HotWarm, PercentileBand, YesNo, avg_compare, hot_warm, yes_no};

#[test]
fn boundaries_map_to_the_higher_bin() {
    let cases = [
        (0.0, YesNo::HellNo),
        (4.999, YesNo::HellNo),
        (5.0, YesNo::No),
        (10.0, YesNo::Nope),
        (39.99, YesNo::Nope),
        (40.0, YesNo::NotReally),
        (50.0, YesNo::Yup),
        (60.0, YesNo::Yeah),
        (89.99, YesNo::Yeah),
        (90.0, YesNo::HellYeah),
        (95.0, YesNo::BloodyHellYes),
        (100.0, YesNo::BloodyHellYes),
    ];
    for (p, expected) in cases {
        assert_eq!(yes_no(p), expected, "percentile {p}");
    }
}

#[test]
fn avg_compare_boundaries() {
    let cases = [
        (0.0, AvgCompare::BloodyCold),
        (5.0, AvgCompare::ReallyCold),
        (10.0, AvgCompare::KindaCool),
        (40.0, AvgCompare::AboutAverage),
        (50.0, AvgCompare::WarmerThanAverage),
        (60.0, AvgCompare::Quite(HotWarm::Hot)),
        (90.0, AvgCompare::Really(HotWarm::Hot)),
        (95.0, AvgCompare::Bloody(HotWarm::Hot)),
        (100.0, AvgCompare::Bloody(HotWarm::Hot)),
    ];
    for (p, expected) in cases {
        assert_eq!(avg_compare(p, 20.0, 15.0), expected, "percentile {p}");
    }
}

#[test]
fn undefined_percentiles_fall_back() {
    for p in [f64::NAN, -1.0, 100.5, f64::INFINITY] {
        assert_eq!(yes_no(p), YesNo::NoData);
        assert_eq!(avg_compare(p, 20.0, 15.0), AvgCompare::NoData);
    }
}

#[test]
fn classifiers_are_total_over_the_range() {
    // every step of 0.01 lands in exactly one band
    for i in 0..=10_000 {
        let p = i as f64 / 100.0;
        assert!(PercentileBand::of(p).is_some(), "percentile {p} has no band");
        assert_ne!(yes_no(p), YesNo::NoData);
        assert_ne!(avg_compare(p, 0.0, 15.0), AvgCompare::NoData);
    }
}

#[test]
fn hot_warm_threshold() {
    assert_eq!(hot_warm(15.1, 15.0), HotWarm::Hot);
    assert_eq!(hot_warm(15.0, 15.0), HotWarm::Warm);
    assert_eq!(hot_warm(-3.0, 15.0), HotWarm::Warm);
    assert_eq!(hot_warm(f64::NAN, 15.0), HotWarm::Warm);
}

#[test]
fn warm_qualifier_in_phrases() {
    assert_eq!(avg_compare(70.0, 10.0, 15.0).to_string(), "It's quite warm!");
    assert_eq!(avg_compare(70.0, 16.0, 15.0).to_string(), "It's quite hot!");
    assert_eq!(avg_compare(97.0, f64::NAN, 15.0).to_string(), "It's bloody warm!");
    assert_eq!(avg_compare(45.0, 30.0, 15.0).to_string(), "It's about average");
}

#[test]
fn keys_are_unique() {
    let all = [
        AvgCompare::BloodyCold,
        AvgCompare::ReallyCold,
        AvgCompare::KindaCool,
        AvgCompare::AboutAverage,
        AvgCompare::WarmerThanAverage,
        AvgCompare::Quite(HotWarm::Hot),
        AvgCompare::Quite(HotWarm::Warm),
        AvgCompare::Really(HotWarm::Hot),
        AvgCompare::Really(HotWarm::Warm),
        AvgCompare::Bloody(HotWarm::Hot),
        AvgCompare::Bloody(HotWarm::Warm),
        AvgCompare::NoData,
    ];
    let mut keys: Vec<&str> = all.iter().map(|c| c.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), all.len());
}
