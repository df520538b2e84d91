use std::fs;

use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn empty_output_dir_lists_nothing() {
    let ws = TempWorkspace::new();
    let output = ws.command().args(["gallery", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let images: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(images, serde_json::json!([]));
}

#[test]
fn lists_images_by_size() {
    let ws = TempWorkspace::new();
    ws.write_file("outputs/small.svg", "<svg/>");
    ws.write_file("outputs/large.png", &"x".repeat(3072));
    ws.write_file("outputs/readme.txt", "ignored");

    let output = ws.command().args(["gallery", "--sort", "size", "--format", "json"]).output().unwrap();
    let images: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let images = images.as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["filename"], "large.png");
    assert_eq!(images[0]["size_kb"], 3.0);
    assert_eq!(images[1]["filename"], "small.svg");
}

#[test]
fn table_lists_image_paths() {
    let ws = TempWorkspace::new();
    ws.write_file("outputs/lid_accuracy.svg", "<svg/>");
    ws.command()
        .arg("gallery")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 image(s)").and(predicate::str::contains("lid_accuracy.svg")));
}

#[test]
fn export_copies_image() {
    let ws = TempWorkspace::new();
    ws.write_file("outputs/news_accuracy.svg", "<svg>news</svg>");
    let dest = ws.path().join("exported");
    fs::create_dir(&dest).unwrap();

    ws.command()
        .args(["gallery", "--export", "news_accuracy.svg", "--to"])
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Exported news_accuracy.svg"));
    assert_eq!(fs::read_to_string(dest.join("news_accuracy.svg")).unwrap(), "<svg>news</svg>");
}

#[test]
fn export_creates_destination_directory() {
    let ws = TempWorkspace::new();
    ws.write_file("outputs/lid_accuracy.svg", "<svg>lid</svg>");

    ws.command().args(["gallery", "--export", "lid_accuracy.svg", "--to", "report/"]).assert().success();
    assert_eq!(fs::read_to_string(ws.path().join("report/lid_accuracy.svg")).unwrap(), "<svg>lid</svg>");

    ws.command().args(["gallery", "--export", "lid_accuracy.svg", "--to", "slides"]).assert().success();
    assert!(ws.path().join("slides").join("lid_accuracy.svg").is_file());
}

#[test]
fn json_reports_png_dimensions() {
    let ws = TempWorkspace::new();
    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    png.extend_from_slice(&13u32.to_be_bytes());
    png.extend_from_slice(b"IHDR");
    png.extend_from_slice(&64u32.to_be_bytes());
    png.extend_from_slice(&32u32.to_be_bytes());
    png.extend_from_slice(&[8, 2, 0, 0, 0, 0, 0, 0, 0]);
    fs::create_dir_all(ws.path().join("outputs")).unwrap();
    fs::write(ws.path().join("outputs/heatmap.png"), png).unwrap();
    ws.write_file("outputs/lid_accuracy.svg", "<svg/>");

    let output = ws.command().args(["gallery", "--format", "json"]).output().unwrap();
    let images: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(images[0]["filename"], "heatmap.png");
    assert_eq!(images[0]["width"], 64);
    assert_eq!(images[0]["height"], 32);
    assert_eq!(images[1]["width"], serde_json::Value::Null);
}

#[test]
fn export_of_unknown_image_fails() {
    let ws = TempWorkspace::new();
    ws.write_file("outputs/a.svg", "<svg/>");
    ws.command()
        .args(["gallery", "--export", "b.svg", "--to", "x.svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image 'b.svg' not found"));
}
