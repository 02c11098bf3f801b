use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn countercmp() -> Command {
    let mut cmd = Command::cargo_bin("countercmp").unwrap();
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

fn read_output(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

#[test]
fn reports_significant_counter() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(dir.path(), "a.csv", "time,cycles,misses\n0,0,0\n1,1,5\n2,3,9\n3,6,16\n");
    let b = write_csv(dir.path(), "b.csv", "time,cycles,misses\n0,0,0\n1,4,5\n2,9,11\n3,15,16\n");
    let out = dir.path().join("result.csv");

    countercmp()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "T-statistics saved to {}",
            out.display()
        )))
        .stdout(predicate::str::contains("Significant columns (p < 0.05):\n  cycles\n"));

    let (headers, rows) = read_output(&out);
    assert_eq!(headers, ["", "time", "cycles", "misses"]);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], ["degrees_of_freedom", "", "4", "4"]);
    assert_eq!(rows[3], ["significant_0.05", "N/A", "Yes", "No"]);
}

#[test]
fn constant_differences_are_not_applicable() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(dir.path(), "a.csv", "time,a\n1,10\n2,12\n3,14\n");
    let b = write_csv(dir.path(), "b.csv", "time,a\n1,10\n2,20\n3,30\n");
    let out = dir.path().join("t.csv");

    countercmp()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No significant differences found (p < 0.05)"));

    let (_, rows) = read_output(&out);
    assert_eq!(rows[0], ["t_value", "", ""]);
    assert_eq!(rows[3], ["significant_0.05", "N/A", "N/A"]);
}

#[test]
fn identical_inputs_are_not_significant() {
    let dir = TempDir::new().unwrap();
    let content = "time,a\n1,10\n2,13\n4,14\n7,20\n";
    let a = write_csv(dir.path(), "a.csv", content);
    let b = write_csv(dir.path(), "b.csv", content);
    let out = dir.path().join("t.csv");

    countercmp()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let (headers, rows) = read_output(&out);
    assert_eq!(headers, ["", "time", "a"]);
    assert_eq!(rows[0], ["t_value", "0.0", "0.0"]);
    assert_eq!(rows[2], ["p_value", "1.0", "1.0"]);
    assert_eq!(rows[3], ["significant_0.05", "No", "No"]);
}

#[test]
fn only_shared_columns_are_written() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(dir.path(), "a.csv", "time,a,x\n1,1,1\n2,3,2\n3,4,5\n");
    let b = write_csv(dir.path(), "b.csv", "time,y,a\n1,1,1\n2,2,4\n3,4,6\n");
    let out = dir.path().join("t.csv");

    countercmp()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let (headers, rows) = read_output(&out);
    assert_eq!(headers, ["", "time", "a"]);
    assert!(rows.iter().all(|r| r.len() == 3));
}

#[test]
fn single_row_input_does_not_crash() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(dir.path(), "a.csv", "time,a\n1,10\n");
    let b = write_csv(dir.path(), "b.csv", "time,a\n1,10\n2,12\n3,15\n");
    let out = dir.path().join("t.csv");

    countercmp()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let (_, rows) = read_output(&out);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], ["t_value", "", ""]);
    assert_eq!(rows[1], ["degrees_of_freedom", "0", "0"]);
}

#[test]
fn json_report() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(dir.path(), "a.csv", "time,a\n1,10\n2,13\n4,14\n7,20\n");
    let b = write_csv(dir.path(), "b.csv", "time,a\n1,10\n2,11\n4,19\n7,22\n");
    let out = dir.path().join("t.csv");

    let assert = countercmp()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["first_sample_count"], 3);
    assert_eq!(value["columns"][1]["name"], "a");
    assert_eq!(value["columns"][1]["degrees_of_freedom"], 4);
    assert!(out.exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let b = write_csv(dir.path(), "b.csv", "time,a\n1,10\n");

    countercmp()
        .arg(dir.path().join("missing.csv"))
        .arg(&b)
        .arg("--output")
        .arg(dir.path().join("t.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn non_numeric_counter_fails() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(dir.path(), "a.csv", "time,a\n1,10\n2,fast\n");
    let b = write_csv(dir.path(), "b.csv", "time,a\n1,10\n2,12\n");
    let out = dir.path().join("t.csv");

    countercmp()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-numeric"));

    assert!(!out.exists());
}

#[test]
fn default_output_lands_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(dir.path(), "a.csv", "time,a\n1,10\n2,13\n4,14\n7,20\n");
    let b = write_csv(dir.path(), "b.csv", "time,a\n1,10\n2,11\n4,19\n7,22\n");

    countercmp()
        .current_dir(dir.path())
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("T-statistics saved to t_statistics.csv"));

    let (headers, rows) = read_output(&dir.path().join("t_statistics.csv"));
    assert_eq!(headers, ["", "time", "a"]);
    assert_eq!(rows.len(), 4);
}
