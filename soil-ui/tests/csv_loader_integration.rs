//! Integration tests that exercise the loader and batch report against an
//! on-disk fixture file.

use std::path::Path;

use pretty_assertions::assert_eq;
use soil_core::{ContainerShape, LengthUnit, SoilVolumeCalculator, compute_volume};
use soil_ui::{app, csv_loader};

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_containers.csv")
        .leak()
}

#[test]
fn test_load_fixture_file_succeeds() {
    let inputs =
        csv_loader::load_from_file(fixture_path()).expect("fixture file should load without error");

    assert_eq!(inputs.len(), 4);
}

#[test]
fn test_fixture_first_row_is_one_liter_tank() {
    let inputs = csv_loader::load_from_file(fixture_path()).unwrap();
    let input = &inputs[0];

    assert_eq!(input.shape, ContainerShape::Rectangular);
    assert_eq!(input.unit, LengthUnit::Centimeters);

    let result = compute_volume(input).expect("complete row has an estimate");
    assert!((result.liters - 1.0).abs() < 1e-9);
    assert_eq!(result.cost, None);
}

#[test]
fn test_fixture_jar_row_has_cost() {
    let inputs = csv_loader::load_from_file(fixture_path()).unwrap();
    let input = &inputs[1];

    assert_eq!(input.shape, ContainerShape::Cylindrical);

    let result = compute_volume(input).unwrap();
    let expected_liters = std::f64::consts::PI * 25.0 * 5.0 / 1000.0;
    assert!((result.liters - expected_liters).abs() < 1e-9);
    assert!((result.cost.unwrap() - expected_liters * 3.5).abs() < 1e-9);
}

#[test]
fn test_fixture_row_without_depth_has_no_estimate() {
    let inputs = csv_loader::load_from_file(fixture_path()).unwrap();

    assert_eq!(inputs[3].unit, LengthUnit::Inches);
    assert_eq!(compute_volume(&inputs[3]), None);
}

#[test]
fn test_batch_report_covers_every_row() {
    let inputs = csv_loader::load_from_file(fixture_path()).unwrap();

    let report = app::format_batch_report(&SoilVolumeCalculator::default(), &inputs);

    assert!(report.contains("Container 1 (Rectangular Tank, Centimeters)"));
    assert!(report.contains("1.00 liters ≈ 4.2 cups ≈ 0.40 soil bags (2.5 L each)"));
    assert!(report.contains("Estimated Soil Cost: $1.37"));
    assert!(report.contains("1.64 liters"));
    assert!(report.contains("Container 4 (Cylindrical Jar, Inches)"));
    assert!(report.contains("Enter your container dimensions to calculate soil volume."));
}

#[test]
fn test_load_nonexistent_file_returns_err() {
    let bad_path = Path::new("/this/path/does/not/exist.csv");
    let result = csv_loader::load_from_file(bad_path);
    assert!(result.is_err());
}
