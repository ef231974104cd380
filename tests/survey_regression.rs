//! Survey Calculation Regression Tests
//!
//! Exercises the public calculation API end to end: a short build-and-turn
//! section is walked station by station, the deltas are summed by the test
//! and the resulting displacement is projected onto a plan direction.

use sairen_survey::physics_engine::dogleg_angle;
use sairen_survey::{
    compute_segment, project_section, SegmentDeltas, SurveyError, SurveyPair, SurveyStation,
};
use std::f64::consts::PI;

/// (measured depth, inclination, azimuth)
const BUILD_AND_TURN: &[(f64, f64, f64)] = &[
    (1000.0, 0.0, 0.0),
    (1030.0, 3.0, 45.0),
    (1060.0, 6.0, 47.0),
    (1090.0, 9.0, 50.0),
    (1120.0, 12.0, 52.0),
    (1150.0, 15.0, 55.0),
];

fn walk(stations: &[(f64, f64, f64)]) -> Vec<SegmentDeltas> {
    stations
        .windows(2)
        .map(|w| {
            let (md1, inc1, az1) = w[0];
            let (md2, inc2, az2) = w[1];
            compute_segment(md2 - md1, az1, inc1, az2, inc2, 0.0).expect("valid segment")
        })
        .collect()
}

#[test]
fn build_section_stays_finite_and_below_course_length() {
    for (w, d) in BUILD_AND_TURN.windows(2).zip(walk(BUILD_AND_TURN)) {
        let course = w[1].0 - w[0].0;
        for v in [d.tvd, d.northing, d.easting, d.dogleg_severity] {
            assert!(v.is_finite(), "non-finite value in {:?}", d);
        }
        let chord = (d.tvd.powi(2) + d.northing.powi(2) + d.easting.powi(2)).sqrt();
        assert!(chord <= course + 1e-9, "chord {} exceeds course {}", chord, course);
        assert!(d.tvd > 0.0, "hole below 90° should always deepen");
    }
}

#[test]
fn build_section_heads_north_east() {
    let deltas = walk(BUILD_AND_TURN);
    let northing: f64 = deltas.iter().map(|d| d.northing).sum();
    let easting: f64 = deltas.iter().map(|d| d.easting).sum();
    let tvd: f64 = deltas.iter().map(|d| d.tvd).sum();

    assert!(northing > 0.0 && easting > 0.0);
    assert!(tvd < 150.0 && tvd > 145.0, "tvd for a gentle build should be just under MD, got {}", tvd);

    let vs = project_section(northing, easting, 50.0);
    assert!(vs.closure_azimuth > 40.0 && vs.closure_azimuth < 55.0, "got {}", vs.closure_azimuth);
    // Plan direction close to the closure, so almost all of it projects
    assert!(vs.vertical_section > 0.95 * vs.closure_distance);
    assert!(vs.vertical_section <= vs.closure_distance + 1e-9);
}

#[test]
fn constant_build_rate_gives_constant_dogleg_severity() {
    // 3° per 30 ft, no turn: DLS = 3°/30 ft at every station
    let stations: Vec<(f64, f64, f64)> = (0..6)
        .map(|i| (1000.0 + 30.0 * f64::from(i), 3.0 * f64::from(i), 120.0))
        .collect();
    for d in walk(&stations) {
        assert!((d.dogleg_severity - 3.0).abs() < 1e-9, "got {}", d.dogleg_severity);
    }
}

#[test]
fn vertical_segment_example() {
    let d = compute_segment(30.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(
        d,
        SegmentDeltas {
            tvd: 30.0,
            northing: 0.0,
            easting: 0.0,
            dogleg_severity: 0.0,
        }
    );
}

#[test]
fn zero_course_length_is_distinct_from_zero_deltas() {
    let pair = SurveyPair::new(0.0, SurveyStation::new(10.0, 20.0), SurveyStation::new(15.0, 25.0));
    assert_eq!(pair.segment(), Err(SurveyError::ZeroCourseLength));

    // A horizontal segment due north has zero TVD and easting but is still a result
    let d = compute_segment(30.0, 0.0, 90.0, 0.0, 90.0, 0.0).unwrap();
    assert!(d.tvd.abs() < 1e-12);
    assert!((d.northing - 30.0).abs() < 1e-12);
}

#[test]
fn quarter_circle_radius() {
    let d = compute_segment(100.0, 0.0, 0.0, 0.0, 90.0, 0.0).unwrap();
    let dl = dogleg_angle(0.0, 0.0, PI / 2.0, 0.0);
    let radius = 100.0 / dl;
    assert!((d.tvd - radius).abs() < 1e-6);
    assert!((d.northing - radius).abs() < 1e-6);
}

#[test]
fn projector_documented_cases() {
    let origin = project_section(0.0, 0.0, 123.0);
    assert_eq!(origin.closure_distance, 0.0);
    assert_eq!(origin.closure_azimuth, 0.0);
    assert_eq!(origin.vertical_section, 0.0);

    let north = project_section(100.0, 0.0, 0.0);
    assert_eq!(north.closure_distance, 100.0);
    assert_eq!(north.closure_azimuth, 0.0);
    assert_eq!(north.directional_difference, 0.0);
    assert!((north.vertical_section - 100.0).abs() < 1e-12);

    let east = project_section(0.0, 50.0, 0.0);
    assert_eq!(east.closure_azimuth, 0.0);
    assert_eq!(east.closure_distance, 50.0);
    assert!((east.vertical_section - 50.0).abs() < 1e-12);
}

#[test]
fn results_serialize_with_field_names() {
    let d = compute_segment(30.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    let json = serde_json::to_value(d).unwrap();
    assert_eq!(json["tvd"], 30.0);
    assert_eq!(json["dogleg_severity"], 0.0);

    let s = project_section(100.0, 0.0, 0.0);
    let json = serde_json::to_value(s).unwrap();
    assert_eq!(json["closure_distance"], 100.0);
    assert_eq!(json["vertical_section"], 100.0);
}
