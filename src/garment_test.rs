#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// GarmentSide
// =============================================================

#[test]
fn side_default_is_front() {
    assert_eq!(GarmentSide::default(), GarmentSide::Front);
}

#[test]
fn side_parses_case_insensitively() {
    assert_eq!("front".parse::<GarmentSide>().unwrap(), GarmentSide::Front);
    assert_eq!("BACK".parse::<GarmentSide>().unwrap(), GarmentSide::Back);
    assert_eq!(" Back ".parse::<GarmentSide>().unwrap(), GarmentSide::Back);
}

#[test]
fn side_rejects_unknown_value() {
    let err = "sleeve".parse::<GarmentSide>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSide(ref s) if s == "sleeve"));
    assert!(err.to_string().contains("sleeve"));
}

#[test]
fn side_display_matches_serde() {
    for side in [GarmentSide::Front, GarmentSide::Back] {
        let json = serde_json::to_string(&side).unwrap();
        assert_eq!(json, format!("\"{side}\""));
    }
}

// =============================================================
// Backdrop
// =============================================================

#[test]
fn centered_backdrop_origin() {
    let b = Backdrop::centered(1000.0, 800.0, 400.0, 500.0);
    assert_eq!(b.origin, Point::new(300.0, 150.0));
    assert_eq!(b.width, 400.0);
    assert_eq!(b.height, 500.0);
}

#[test]
fn image_larger_than_stage_has_negative_origin() {
    let b = Backdrop::centered(100.0, 100.0, 300.0, 200.0);
    assert_eq!(b.origin, Point::new(-100.0, -50.0));
}

#[test]
fn local_stage_round_trip() {
    let b = Backdrop::centered(1000.0, 800.0, 400.0, 500.0);
    let local = Point::new(12.0, 34.0);
    let stage = b.local_to_stage(local);
    assert_eq!(stage, Point::new(312.0, 184.0));
    assert_eq!(b.stage_to_local(stage), local);
}

#[test]
fn default_backdrop_is_identity() {
    let b = Backdrop::default();
    let p = Point::new(5.0, 6.0);
    assert_eq!(b.local_to_stage(p), p);
    assert_eq!(b.stage_bounds(&Bounds::new(1.0, 2.0, 3.0, 4.0)), Bounds::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn stage_bounds_offsets_by_origin() {
    let b = Backdrop { origin: Point::new(10.0, 20.0), width: 50.0, height: 50.0 };
    assert_eq!(b.stage_bounds(&Bounds::new(1.0, 1.0, 5.0, 5.0)), Bounds::new(11.0, 21.0, 5.0, 5.0));
    assert_eq!(b.image_bounds(), Bounds::new(10.0, 20.0, 50.0, 50.0));
}
