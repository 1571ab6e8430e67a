//! Update Record Integration Tests
//!
//! Exercises the public API the way a stream consumer would: build
//! coordinates once, construct updates against them, drain a mixed buffer.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use market_data_updates::{
    DataCoordinate, DataFrequency, DataUpdate, PointUpdate, SeriesUpdate, TimeSeries, UpdateValue,
};

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn coord_x() -> Arc<DataCoordinate> {
    Arc::new(
        DataCoordinate::new("spot")
            .with_dataset("FXSPOT")
            .with_dimension("ccy", "EURUSD")
            .with_frequency(DataFrequency::Daily),
    )
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn two_day_series_update() {
    let coord = coord_x();
    let d1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let d2 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let update: SeriesUpdate =
        SeriesUpdate::new([(d1, 100.5), (d2, 101.2)].into_iter().collect(), Arc::clone(&coord));

    let points: Vec<_> = update.series.iter().map(|(t, v)| (*t, *v)).collect();
    assert_eq!(points, vec![(d1, 100.5), (d2, 101.2)]);
    assert!(Arc::ptr_eq(&update.coordinate, &coord));
}

#[test]
fn empty_series_update() {
    let update: SeriesUpdate = SeriesUpdate::new(TimeSeries::new(), coord_x());
    assert!(update.series.is_empty());
}

#[test]
fn independent_updates_from_equal_series() {
    let coord = coord_x();
    let make = || -> TimeSeries { [(ts(0), 1.0), (ts(60), 2.0)].into_iter().collect() };

    let mut a: SeriesUpdate = SeriesUpdate::new(make(), Arc::clone(&coord));
    let b: SeriesUpdate = SeriesUpdate::new(make(), Arc::clone(&coord));
    assert_eq!(a, b);

    a.series.insert(ts(120), 3.0);

    assert_eq!(a.series.len(), 3);
    assert_eq!(b.series.len(), 2);
    assert_ne!(a, b);
}

#[test]
fn drain_mixed_updates_into_series_cache() {
    let coord = coord_x();
    let first: SeriesUpdate = SeriesUpdate::new(
        [(ts(0), 1.0), (ts(60), 2.0)].into_iter().collect(),
        Arc::clone(&coord),
    );
    let second: SeriesUpdate = SeriesUpdate::new(
        [(ts(60), 2.5), (ts(120), 3.0)].into_iter().collect(),
        Arc::clone(&coord),
    );
    let status: PointUpdate = PointUpdate::with_coordinate(ts(90), "halted", Arc::clone(&coord));
    let cleared: PointUpdate = PointUpdate::new(ts(100), None::<f64>);

    let buffer: Vec<DataUpdate> = vec![
        first.into(),
        status.into(),
        second.into(),
        cleared.into(),
    ];

    let mut cache = TimeSeries::new();
    let mut overwritten = 0;
    let mut labels = Vec::new();
    for update in buffer {
        match update {
            DataUpdate::Series(u) => overwritten += cache.merge(u.series),
            DataUpdate::Point(p) => labels.push((p.time, p.value)),
        }
    }

    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get(&ts(60)), Some(&2.5));
    assert_eq!(overwritten, 1);
    assert_eq!(
        labels,
        vec![
            (ts(90), UpdateValue::Text("halted".to_string())),
            (ts(100), UpdateValue::Absent),
        ]
    );
}

#[test]
fn updates_cross_threads() {
    let coord = coord_x();
    let update: SeriesUpdate =
        SeriesUpdate::new([(ts(0), 1.0)].into_iter().collect(), Arc::clone(&coord));

    let handle = std::thread::spawn(move || update.series.len());
    assert_eq!(handle.join().unwrap(), 1);
    assert_eq!(Arc::strong_count(&coord), 1);
}

// =============================================================================
// Properties
// =============================================================================

fn value_strategy() -> impl Strategy<Value = UpdateValue> {
    prop_oneof![
        Just(UpdateValue::Absent),
        "[a-zA-Z0-9 ]{0,16}".prop_map(UpdateValue::Text),
        (-1.0e9..1.0e9f64).prop_map(UpdateValue::Numeric),
    ]
}

fn series_strategy() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::vec((0i64..4_000_000_000, -1.0e6..1.0e6f64), 0..32)
}

proptest! {
    #[test]
    fn series_update_preserves_fields(points in series_strategy(), measure in "[a-z]{1,12}") {
        let series: TimeSeries = points.iter().map(|(s, v)| (ts(*s), *v)).collect();
        let coord = Arc::new(DataCoordinate::new(measure));

        let update: SeriesUpdate = SeriesUpdate::new(series.clone(), Arc::clone(&coord));

        prop_assert_eq!(&update.series, &series);
        prop_assert!(Arc::ptr_eq(&update.coordinate, &coord));
    }

    #[test]
    fn point_update_preserves_fields(
        secs in 0i64..4_000_000_000,
        value in value_strategy(),
        with_coord in any::<bool>(),
    ) {
        let coord = coord_x();
        let update: PointUpdate = if with_coord {
            PointUpdate::with_coordinate(ts(secs), value.clone(), Arc::clone(&coord))
        } else {
            PointUpdate::new(ts(secs), value.clone())
        };

        prop_assert_eq!(update.time, ts(secs));
        prop_assert_eq!(&update.value, &value);
        match &update.coordinate {
            Some(c) => prop_assert!(with_coord && Arc::ptr_eq(c, &coord)),
            None => prop_assert!(!with_coord),
        }
    }

    #[test]
    fn mutating_one_series_leaves_the_other(
        points in series_strategy(),
        extra in 4_000_000_000i64..5_000_000_000,
    ) {
        let coord = coord_x();
        let series: TimeSeries = points.iter().map(|(s, v)| (ts(*s), *v)).collect();

        let mut a: SeriesUpdate = SeriesUpdate::new(series.clone(), Arc::clone(&coord));
        let b: SeriesUpdate = SeriesUpdate::new(series.clone(), Arc::clone(&coord));
        a.series.insert(ts(extra), 0.0);

        prop_assert_eq!(a.series.len(), b.series.len() + 1);
        prop_assert_eq!(&b.series, &series);
    }
}
