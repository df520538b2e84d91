use std::fs;

use predicates::prelude::*;

use crate::common::TempWorkspace;

const MODELS: [&str; 2] = ["tiny-a", "org/tiny-b"];

#[test]
fn run_all_writes_every_artifact() {
    let ws = TempWorkspace::with_fixtures(&MODELS);
    ws.command()
        .args(["run-all", "--models", "tiny-a", "org/tiny-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run complete."));

    let out = ws.out_dir();
    for name in [
        "tokenization_stats.csv",
        "tokenization_avg_tokens.svg",
        "tokenization_unk_rate.svg",
        "lid_accuracy.csv",
        "lid_accuracy.svg",
        "news_accuracy.csv",
        "news_accuracy.svg",
        "imbalance_overall.csv",
        "imbalance_overall.svg",
        "summary.json",
    ] {
        assert!(out.join(name).is_file(), "missing {name}");
    }

    let stats = fs::read_to_string(out.join("tokenization_stats.csv")).unwrap();
    let mut lines = stats.lines();
    assert_eq!(lines.next(), Some("model,lang,avg_tokens,unk_rate"));
    assert_eq!(lines.next(), Some("tiny-a,bn,1.5,0"));

    let lid = fs::read_to_string(out.join("lid_accuracy.csv")).unwrap();
    assert!(lid.lines().nth(1).unwrap().starts_with("tiny-a,overall,"));

    let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["tokenization"].as_array().unwrap().len(), 6);
    assert_eq!(summary["imbalance"][1]["model"], "org/tiny-b");
    assert_eq!(summary["imbalance"][1]["minority"], "hi");
    assert_eq!(summary["imbalance"][1]["fraction"], 0.3);
}

#[test]
fn tokenization_prints_per_language_stats() {
    let ws = TempWorkspace::with_fixtures(&["tiny-a"]);
    ws.command()
        .args(["tokenization", "--models", "tiny-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Model: tiny-a"))
        .stdout(predicate::str::contains("  hi: avg_tokens=1.75, unk_rate=0.1429"))
        .stdout(predicate::str::contains("  ta: avg_tokens=1.50, unk_rate=0.0000"));
}

#[test]
fn lid_reports_overall_first() {
    let ws = TempWorkspace::with_fixtures(&["tiny-a"]);
    let output = ws.command().args(["lid", "--models", "tiny-a"]).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines[0], "Model: tiny-a (LID)");
    assert!(lines[1].starts_with("  overall: acc="));
    assert!(lines[2].starts_with("  bn: acc="));
}

#[test]
fn news_within_language_adds_a_section_per_model() {
    let ws = TempWorkspace::with_fixtures(&["tiny-a"]);
    let output = ws.command().args(["news", "--models", "tiny-a", "--within-language"]).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let section: Vec<&str> = stdout.lines().skip_while(|l| *l != "  within-language accuracy:").collect();
    assert_eq!(section.len(), 4, "{stdout}");
    for (line, lang) in section[1..].iter().zip(["bn", "hi", "ta"]) {
        assert!(line.starts_with(&format!("    {lang}: acc=")), "{line}");
    }
}

#[test]
fn imbalance_reports_overall_accuracy() {
    let ws = TempWorkspace::with_fixtures(&["tiny-a"]);
    ws.command()
        .args(["imbalance", "--models", "tiny-a", "--minority", "ta", "--minority-frac", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Model: tiny-a (Imbalance: minority=ta, frac=0.5)"))
        .stdout(predicate::str::contains("  overall_acc="));
}

#[test]
fn missing_tokenizer_names_model() {
    let ws = TempWorkspace::with_fixtures(&[]);
    ws.command()
        .args(["news", "--models", "absent-model"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent-model"));
}

#[test]
fn seed_makes_runs_repeatable() {
    let ws = TempWorkspace::with_fixtures(&["tiny-a"]);
    let run = || ws.command().args(["news", "--models", "tiny-a", "--seed", "3"]).output().unwrap().stdout;
    assert_eq!(run(), run());
}
