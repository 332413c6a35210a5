use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn script(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("script.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn replay_prints_summary_and_lists() {
    let dir = TempDir::new().unwrap();
    let file = script(&dir, "add,inc,Salary,1000\nadd,exp,Rent,400\n");

    tally(&dir)
        .arg("replay")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Available budget: $600.00"))
        .stdout(predicate::str::contains("+ $1,000.00"))
        .stdout(predicate::str::contains("- $400.00"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("exp-0"))
        .stdout(predicate::str::contains("40%"));
}

#[test]
fn replay_json_output() {
    let dir = TempDir::new().unwrap();
    let file = script(&dir, "add,exp,Coffee,5\n");

    let output = tally(&dir)
        .args(["replay", "--json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total_expense"], 500);
    assert_eq!(json["summary"]["net_budget"], -500);
    assert!(json["summary"]["spend_ratio"].is_null());
    assert!(json["expenses"][0]["share_percent"].is_null());
}

#[test]
fn replay_reports_bad_row() {
    let dir = TempDir::new().unwrap();
    let file = script(&dir, "add,inc,Salary,1000\nedit,inc-0,Pay\n");

    tally(&dir)
        .arg("replay")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2"))
        .stderr(predicate::str::contains("unknown verb 'edit'"));
}

#[test]
fn replay_ignores_invalid_adds_and_unknown_deletes() {
    let dir = TempDir::new().unwrap();
    let file = script(
        &dir,
        "add,exp,,10\nadd,exp,Lunch,-4\ndelete,inc-3\nadd,exp,Lunch,12.5\n",
    );

    tally(&dir)
        .arg("replay")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses (1)"))
        .stdout(predicate::str::contains("exp-0"))
        .stdout(predicate::str::contains("- $12.50"))
        .stdout(predicate::str::contains("Ignored 2 invalid add row(s)"));
}

#[test]
fn replay_uses_configured_currency_symbol() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "currency_symbol": "€" }"#,
    )
    .unwrap();
    let file = script(&dir, "add,inc,Salary,20\n");

    tally(&dir)
        .arg("replay")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ €20.00"));
}

#[test]
fn replay_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["replay", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open script"));
}

#[test]
fn init_writes_settings_once() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings to"));

    let written = fs::read_to_string(dir.path().join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["currency_symbol"], "$");
    assert_eq!(json["default_category"], "income");

    tally(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings already exist"));

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved:   yes"));
}

#[test]
fn config_command_shows_paths() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tally Configuration"))
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("no (using defaults)"))
        .stdout(predicate::str::contains("Currency symbol:  $"));
}
