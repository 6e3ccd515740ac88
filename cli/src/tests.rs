use std::fs;

use tempdir::TempDir;

use crate::args::ExportFormat;
use crate::commands::{export, plot_acceptance_ratio, plot_energy};

const RUN_LOG: &str = "\
Step eBond eAngle eDihedral eCoulomb eCoulomb14 eLJ eLJ14 eContacts eSol eH
(BEST) 0 1.0 2.0 3.0 4.0 5.0 6.0 7.0 8.0 9.0 10.0
AR: 0.50 | temperature 1.00
(BEST) 1 0.5 0.5 0.5 0.5 0.5 0.5 0.5 0.5 NaN 0.5
AR: 0.75 | temperature 0.90
(TRGT) - 0.0 0.5 0.0 1.0 0.0 0.0 0.0 0.0 0.0 0.0
";

#[test]
fn acceptance_chart_rendered() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let log_path = temp_dir.path().join("run.log");
    fs::write(&log_path, RUN_LOG).expect("Can't write test log");
    let out_path = temp_dir.path().join("acceptance.svg");
    plot_acceptance_ratio(&log_path, &out_path);
    let contents = fs::read_to_string(&out_path).expect("Can't read chart back");
    assert!(contents.contains("<svg"));
    assert!(contents.contains("Acceptance Ratio"));
}

#[test]
fn energy_chart_rendered() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let log_path = temp_dir.path().join("run.log");
    fs::write(&log_path, RUN_LOG).expect("Can't write test log");
    let out_path = temp_dir.path().join("energy.svg");
    plot_energy(&log_path, &out_path, false, false);
    let contents = fs::read_to_string(&out_path).expect("Can't read chart back");
    assert!(contents.contains("<svg"));
    assert!(contents.contains("eBond"));
    assert!(contents.contains("eH"));
}

#[test]
fn grouped_chart_rendered() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let log_path = temp_dir.path().join("run.log");
    fs::write(&log_path, RUN_LOG).expect("Can't write test log");
    let out_path = temp_dir.path().join("energy.svg");
    plot_energy(&log_path, &out_path, true, false);
    let contents = fs::read_to_string(&out_path).expect("Can't read chart back");
    assert!(contents.contains("<svg"));
    assert!(contents.contains("Amber"));
    assert!(contents.contains("coarseGrain"));
}

#[test]
fn csv_exported() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let log_path = temp_dir.path().join("run.log");
    fs::write(&log_path, RUN_LOG).expect("Can't write test log");
    let out_path = temp_dir.path().join("energy.csv");
    export(&log_path, &out_path, &ExportFormat::Csv, false);
    let contents = fs::read_to_string(&out_path).expect("Can't read export back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "step,eBond,eAngle,eDihedral,eCoulomb,eCoulomb14,eLJ,eLJ14,eContacts,eSol,eH"
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn json_exported() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let log_path = temp_dir.path().join("run.log");
    fs::write(&log_path, RUN_LOG).expect("Can't write test log");
    let out_path = temp_dir.path().join("energy.json");
    export(&log_path, &out_path, &ExportFormat::Json, true);
    let contents = fs::read_to_string(&out_path).expect("Can't read export back");
    assert!(contents.contains("\"terms\""));
    assert!(contents.contains("\"eSol\""));
}
