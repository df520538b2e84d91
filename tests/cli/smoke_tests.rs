use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_indic_eval"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run-all").and(predicate::str::contains("--data-dir")));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_indic_eval"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn smoke_annotates_bundled_dataset() {
    Command::new(env!("CARGO_BIN_EXE_indic_eval"))
        .args(["smoke", "--data-dir", "data"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Script detection smoke test:\n"))
        .stdout(predicate::str::contains("  [ta] -> script=ta, code_mixed=false | நான் தமிழ் பேசுவேன்."))
        .stdout(predicate::str::contains("[bn] -> script=bn, code_mixed=true | আমার দোস্ত বলল नमस्ते ভাই।"));
}

#[test]
fn smoke_honours_limit_and_json() {
    let ws = TempWorkspace::with_fixtures(&[]);
    let output = ws.command().args(["smoke", "--limit", "2", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["lang"], "hi");
    assert_eq!(rows[0]["code_mixed"], true);
    assert_eq!(rows[1]["script"], "hi");
}

#[test]
fn missing_dataset_fails_with_path() {
    let ws = TempWorkspace::new();
    ws.command()
        .arg("smoke")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: loading").and(predicate::str::contains("lid_samples.csv")));
}

#[test]
fn rejects_zero_limit() {
    Command::new(env!("CARGO_BIN_EXE_indic_eval"))
        .args(["smoke", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}
