//! Integration test: run the binary against a catalog file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("campaign_layout_cli_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Config pointing the log file into `dir` so runs never touch the user's
/// state directory.
fn write_config(dir: &Path) -> PathBuf {
    let config = dir.join("config.toml");
    let log = dir.join("run.log");
    fs::write(
        &config,
        format!("log_file_path = {:?}\n", log.to_string_lossy()),
    )
    .unwrap();
    config
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_campaign-layout"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected version in output, got: {}",
        stdout
    );
}

#[test]
fn binary_reports_visible_campaigns() {
    let dir = scratch_dir("report");
    let config = write_config(&dir);
    let catalog = dir.join("campaigns.json");
    fs::write(
        &catalog,
        r#"[
            {"name": "Summer", "description": "", "image": {"width": 100, "height": 100}},
            {"name": "Winter", "description": "", "image": {"width": 100, "height": 100}}
        ]"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_campaign-layout"))
        .arg(&catalog)
        .args(["--width", "300", "--viewport-height", "1000", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "binary failed: {:?}", output);
    assert!(stdout.contains("2 visible"), "unexpected report: {}", stdout);
    assert!(stdout.contains("Summer") && stdout.contains("Winter"));
    assert!(dir.join("run.log").exists(), "log file should be written");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn binary_fails_on_missing_catalog() {
    let dir = scratch_dir("missing");
    let config = write_config(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_campaign-layout"))
        .arg(dir.join("nope.json"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let _ = fs::remove_dir_all(&dir);
}
