use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn periods() -> Command {
    Command::cargo_bin("periods").unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_overlapping_periods_from_stdin() {
    let output = periods()
        .write_stdin("01/01/2020 a 10/01/2020\n05/01/2020 a 15/01/2020\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["total_duration"], json!({"years": 0, "months": 0, "days": 15}));
    assert_eq!(value["analyzed_periods"][0]["is_excluded"], json!(true));
    assert_eq!(value["analyzed_periods"][1]["is_excluded"], json!(true));
    assert_eq!(value["analyzed_periods"][0]["duration"], json!("10 dias"));
}

#[test]
fn test_disjoint_periods_from_file() {
    let output = periods().arg(fixture("disjoint.txt")).output().unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["total_duration"]["days"], json!(8));
    assert_eq!(
        value["input_periods"],
        json!(["01/01/2020 a 05/01/2020", "10/01/2020 a 12/01/2020"])
    );
    assert_eq!(value["analyzed_periods"][0]["is_excluded"], json!(false));
    assert_eq!(value["analyzed_periods"][1]["is_excluded"], json!(false));
}

#[test]
fn test_dash_reads_stdin() {
    periods()
        .arg("-")
        .write_stdin("01/01/2020 a 01/01/2020")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""duration":"1 dia""#));
}

#[test]
fn test_empty_input_is_zero_report() {
    let output = periods().write_stdin("").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "total_duration": {"years": 0, "months": 0, "days": 0},
            "input_periods": [],
            "analyzed_periods": [],
        })
    );
}

#[test]
fn test_invalid_line_reports_error_only() {
    let output = periods().write_stdin("not-a-date\n").output().unwrap();
    assert!(!output.status.success());

    let value = stdout_json(&output);
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["error"].as_str().unwrap().contains("not-a-date"));
}

#[test]
fn test_missing_file_reports_error() {
    periods()
        .arg("no-such-periods.txt")
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#"{"error":"Missing input"#));
}

#[test]
fn test_invalid_utf8_reports_error() {
    periods()
        .write_stdin(vec![0xffu8, 0xfe, 0x41])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid encoding"));
}

#[test]
fn test_pretty_output_is_indented() {
    periods()
        .arg("--pretty")
        .arg(fixture("overlapping.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"input_periods\": ["));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = periods()
        .arg("-vv")
        .arg(fixture("overlapping.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());
    // stdout is still a single JSON document
    stdout_json(&output);
}
