// core/tests/test_interpolate.rs
use altigraph_core::interpolate::{interpolate_segment, DEFAULT_INTERVAL_S};
use altigraph_core::models::TrackPoint;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn point(lat: f64, lon: f64, ele: Option<f64>, offset_s: Option<i64>) -> TrackPoint {
    TrackPoint {
        lat,
        lon,
        elevation_m: ele,
        time: offset_s.map(|s| base_time() + Duration::seconds(s)),
    }
}

#[test]
fn test_fills_long_gap_at_interval() {
    let points = vec![
        point(60.0, 10.0, Some(100.0), Some(0)),
        point(60.003, 10.003, Some(130.0), Some(30)),
    ];

    let out = interpolate_segment(&points, Duration::seconds(DEFAULT_INTERVAL_S));

    // original + 2 innskutte + original
    assert_eq!(out.len(), 4);
    assert_eq!(out[1].time, Some(base_time() + Duration::seconds(10)));
    assert_eq!(out[2].time, Some(base_time() + Duration::seconds(20)));
    assert!((out[1].elevation_m.unwrap() - 110.0).abs() < 1e-9);
    assert!((out[2].elevation_m.unwrap() - 120.0).abs() < 1e-9);
    assert!((out[1].lat - 60.001).abs() < 1e-9);
    assert!((out[2].lon - 10.002).abs() < 1e-9);
}

#[test]
fn test_short_gap_left_untouched() {
    let points = vec![
        point(60.0, 10.0, Some(100.0), Some(0)),
        point(60.001, 10.001, Some(105.0), Some(10)),
    ];
    let out = interpolate_segment(&points, Duration::seconds(10));
    assert_eq!(out.len(), 2); // gap == intervall: ingenting å fylle
}

#[test]
fn test_missing_time_pair_copied_through() {
    let points = vec![
        point(60.0, 10.0, Some(100.0), Some(0)),
        point(60.001, 10.001, Some(130.0), None),
        point(60.002, 10.002, Some(140.0), Some(60)),
    ];
    let out = interpolate_segment(&points, Duration::seconds(10));

    // Begge parene mangler tid i én ende: bare originalpunktene igjen
    assert_eq!(out.len(), 3);
    assert!((out[1].lat - 60.001).abs() < 1e-12);
}

#[test]
fn test_elevation_none_only_when_both_ends_missing() {
    let points = vec![
        point(60.0, 10.0, None, Some(0)),
        point(60.003, 10.003, None, Some(30)),
    ];
    let out = interpolate_segment(&points, Duration::seconds(10));
    assert_eq!(out.len(), 4);
    assert!(out[1].elevation_m.is_none());
    assert!(out[2].elevation_m.is_none());

    // Én ende med høyde: manglende ende regnes som 0
    let points = vec![
        point(60.0, 10.0, None, Some(0)),
        point(60.003, 10.003, Some(30.0), Some(30)),
    ];
    let out = interpolate_segment(&points, Duration::seconds(10));
    assert!((out[1].elevation_m.unwrap() - 10.0).abs() < 1e-9);
    assert!((out[2].elevation_m.unwrap() - 20.0).abs() < 1e-9);
}

#[test]
fn test_empty_and_single_point() {
    assert!(interpolate_segment(&[], Duration::seconds(10)).is_empty());

    let single = vec![point(60.0, 10.0, Some(100.0), Some(0))];
    let out = interpolate_segment(&single, Duration::seconds(10));
    assert_eq!(out.len(), 1);
}
