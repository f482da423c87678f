//! Integration tests that load calculator constants from an on-disk TOML
//! file and check that the batch report uses them.

use std::path::{Path, PathBuf};

use soil_core::SoilVolumeCalculator;
use soil_ui::{app, config, csv_loader};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_config_file_bag_size_reaches_batch_report() {
    let calculator_config =
        config::load_config(Some(&fixture("config.toml"))).expect("fixture config should load");
    let calculator =
        SoilVolumeCalculator::new(calculator_config).expect("fixture config is valid");
    let inputs = csv_loader::load_from_file(&fixture("sample_containers.csv")).unwrap();

    let report = app::format_batch_report(&calculator, &inputs);

    assert!(report.contains("1.00 liters ≈ 4.2 cups ≈ 0.20 soil bags (5 L each)"));
    assert!(!report.contains("(2.5 L each)"));
}
