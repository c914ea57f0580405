use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::cargo_bin("pace").unwrap()
}

#[test]
fn prints_distance() {
    cmd()
        .args(["30", "5:00"])
        .assert()
        .success()
        .stdout(predicate::eq("Distance: 6.00 km\n"));
}

#[test]
fn rounds_to_two_decimals() {
    cmd()
        .args(["25", "5:30"])
        .assert()
        .success()
        .stdout(contains("Distance: 4.55 km"));
}

#[test]
fn time_with_unit_suffix() {
    cmd()
        .args(["30 min", "5:00"])
        .assert()
        .success()
        .stdout(predicate::eq("Distance: 6.00 km\n"));
}

#[test]
fn near_halfway_distance_rounds_down() {
    cmd()
        .args(["0.015", "1:00"])
        .assert()
        .success()
        .stdout(contains("Distance: 0.01 km"));
}

#[test]
fn zero_time_fails() {
    cmd()
        .args(["0", "5:00"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Enter correct data."))
        .stdout(predicate::str::is_empty());
}

#[test]
fn pace_without_colon_fails() {
    cmd()
        .args(["30", "500"])
        .assert()
        .failure()
        .stderr(contains("Enter correct data."));
}

#[test]
fn negative_time_is_a_value_not_a_flag() {
    cmd()
        .args(["-30", "5:00"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Enter correct data."));
}

#[test]
fn zero_pace_prints_infinity() {
    cmd()
        .args(["30", "0:00"])
        .assert()
        .success()
        .stdout(contains("Distance: Infinity km"));
}

#[test]
fn json_report() {
    let output = cmd().args(["--json", "30", "5:30"]).output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["time_minutes"], 30.0);
    assert_eq!(report["pace_minutes"], 5.5);
    assert_eq!(report["display"], "Distance: 5.45 km");
    let km = report["distance_km"].as_f64().unwrap();
    assert!((km - 30.0 / 5.5).abs() < 1e-9);
}

#[test]
fn json_report_null_for_infinite_distance() {
    let output = cmd().args(["--json", "30", "0:00"]).output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["distance_km"].is_null());
    assert_eq!(report["display"], "Distance: Infinity km");
}

#[test]
fn missing_arguments_is_usage_error() {
    cmd().arg("30").assert().failure().code(2);
}
