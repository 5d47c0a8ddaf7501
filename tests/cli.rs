mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn bare() -> Command {
    let mut cmd = Command::cargo_bin("wbi-dash").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("WBI_DATA_DIR")
        .env_remove("WBI_LOG_DIR");
    cmd
}

/// Stderr-only logging, so runs leave no `log/` behind.
fn wbi() -> Command {
    let mut cmd = bare();
    cmd.arg("--no-log-file");
    cmd
}

fn single_log_file(dir: &std::path::Path) -> String {
    let files: Vec<_> = std::fs::read_dir(dir).unwrap().collect();
    assert_eq!(files.len(), 1);
    let path = files[0].as_ref().unwrap().path();
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.ends_with(".log") && name.len() == "YYYY-MM-DD.log".len(), "{name}");
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn cli_shows_help() {
    wbi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn years_lists_literacy_columns() {
    let dir = common::data_dir();
    wbi()
        .args(["years", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("2015\n2016\n");
}

#[test]
fn data_dir_from_env() {
    let dir = common::data_dir();
    wbi()
        .env("WBI_DATA_DIR", dir.path())
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::contains("2016"));
}

#[test]
fn missing_data_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    wbi()
        .args(["years", "--data-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading indicator files"));
}

#[test]
fn render_writes_charts_and_export() {
    let dir = common::data_dir();
    let out = tempfile::tempdir().unwrap();
    let export = out.path().join("series.csv");
    wbi()
        .args(["render", "--year", "2016", "--data-dir"])
        .arg(dir.path())
        .arg("--out-dir")
        .arg(out.path())
        .arg("--export")
        .arg(&export)
        .assert()
        .success();

    for stem in ["gdp_growth", "literacy_vs_gdp", "literacy_map", "fertility_map"] {
        let p = out.path().join(format!("{stem}_2016.svg"));
        assert!(p.exists(), "{} missing", p.display());
    }
    let csv = std::fs::read_to_string(&export).unwrap();
    assert!(csv.starts_with("year,indicator,country,value"));
}

#[test]
fn render_unknown_year_fails() {
    let dir = common::data_dir();
    let out = tempfile::tempdir().unwrap();
    wbi()
        .args(["render", "--year", "1850", "--data-dir"])
        .arg(dir.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("1850"));
}

#[test]
fn stats_prints_one_line_per_indicator() {
    let dir = common::data_dir();
    let assert = wbi()
        .args(["stats", "--year", "2015", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("count=5 missing=1"));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn log_dir_receives_a_dated_file() {
    let dir = common::data_dir();
    let logs = tempfile::tempdir().unwrap();
    bare()
        .args(["years", "--data-dir"])
        .arg(dir.path())
        .arg("--log-dir")
        .arg(logs.path())
        .assert()
        .success();
    assert!(single_log_file(logs.path()).contains(" - INFO - "));
}

#[test]
fn logs_go_to_log_dir_by_default() {
    let dir = common::data_dir();
    let cwd = tempfile::tempdir().unwrap();
    bare()
        .current_dir(cwd.path())
        .args(["years", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success();
    let txt = single_log_file(&cwd.path().join("log"));
    assert!(txt.contains("read success"));
}

#[test]
fn no_log_file_writes_nothing() {
    let dir = common::data_dir();
    let cwd = tempfile::tempdir().unwrap();
    wbi()
        .current_dir(cwd.path())
        .args(["years", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success();
    assert!(!cwd.path().join("log").exists());
}
