use assert_cmd::Command;
use predicates::prelude::*;

fn detect() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_indic_eval"));
    cmd.arg("detect");
    cmd
}

#[test]
fn reports_dominant_script_per_text() {
    detect()
        .args(["नमस्ते", "hello world", "நன்றி"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "script=hi, code_mixed=false | नमस्ते\nscript=none, code_mixed=false | hello world\nscript=ta, code_mixed=false | நன்றி\n",
        ));
}

#[test]
fn earlier_script_wins_ties() {
    detect().arg("অक").assert().success().stdout(predicate::str::starts_with("script=hi, code_mixed=true"));
}

#[test]
fn json_output_uses_null_for_unknown_script() {
    let output = detect().args(["--format", "json", "abc", "नमस्ते বাংলা"]).output().unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["script"], serde_json::Value::Null);
    assert_eq!(rows[1]["code_mixed"], true);
}

#[test]
fn requires_text() {
    detect().assert().failure();
}
