//! Tests for loading and saving vehicle setup files

use pretty_assertions::assert_eq;
use springrate_core::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_load_setup_file() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = tempdir().unwrap();
    let path = dir.path().join("track_car.json");

    let inputs = VehicleInputs {
        sprung_weight: 980.0,
        front_weight_dist_percent: 47.5,
        natural_frequency_hz: 3.2,
        front_motion_ratio: 0.85,
        rear_motion_ratio: 0.75,
        damp_target_percent: 65.0,
        bump_rebound_ratio: BumpReboundRatio::TwoToOne,
    };
    inputs.save(&path).unwrap();

    let loaded = VehicleInputs::load(&path).unwrap();
    assert_eq!(loaded, inputs);
}

#[test]
fn test_loaded_setup_calculates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preset.json");
    fs::write(
        &path,
        r#"{
            "sprung_weight": 1500.0,
            "natural_frequency_hz": 1.2,
            "damp_target_percent": 25
        }"#,
    )
    .unwrap();

    let inputs = VehicleInputs::load(&path).unwrap();
    let report = calculate_setup(inputs).unwrap();

    assert_eq!(report.frequency_class, RideFrequencyClass::SportsCar);
    assert_eq!(report.damping_class, DampingTargetClass::PassengerCar);
    assert!((report.front.corner_sprung_mass - 375.0).abs() < 1e-9);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let result = VehicleInputs::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(SetupError::IoError(_))));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ sprung_weight: ").unwrap();

    let result = VehicleInputs::load(&path);
    assert!(matches!(result, Err(SetupError::ParseError(_))));
}

#[test]
fn test_load_rejects_negative_motion_ratio() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("negative.json");
    fs::write(&path, r#"{ "rear_motion_ratio": -0.5 }"#).unwrap();

    match VehicleInputs::load(&path) {
        Err(SetupError::NegativeValue { field, value }) => {
            assert_eq!(field, "rear_motion_ratio");
            assert_eq!(value, -0.5);
        }
        other => panic!("Expected NegativeValue, got {:?}", other),
    }
}

#[test]
fn test_zero_motion_ratio_loads_but_fails_calculation() {
    let inputs = VehicleInputs::from_json(r#"{ "front_motion_ratio": 0.0 }"#).unwrap();
    assert!(matches!(
        calculate_setup(inputs),
        Err(SetupError::InvalidMotionRatio { .. })
    ));
}
