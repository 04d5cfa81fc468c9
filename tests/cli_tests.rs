//! CLI interface tests
//!
//! Tests argument handling: --help, --version, missing and nonexistent paths

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::fixtures;

/// Helper to get the webpack-diff binary command
fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_webpack-diff"))
}

#[test]
fn test_cli_help_flag_displays_usage_information() {
    get_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compare two webpack stats snapshots"))
        .stdout(predicate::str::contains("--cutoff"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    get_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("webpack-diff"));
}

#[test]
fn test_no_arguments_reports_missing_parameter() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");

    get_bin()
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing required parameter"))
        .stderr(predicate::str::contains("webpack-diff <baseline> <current>"));
}

#[test]
fn test_missing_current_argument_exits_1() {
    let (temp_dir, baseline, _) =
        fixtures::write_pair(fixtures::BASELINE_STATS, fixtures::CURRENT_STATS)
            .expect("Failed to create fixtures");

    get_bin()
        .current_dir(temp_dir.path())
        .arg(&baseline)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing required parameter: current"));
}

#[test]
fn test_nonexistent_baseline_exits_1_naming_path() {
    let (temp_dir, _, current) =
        fixtures::write_pair(fixtures::BASELINE_STATS, fixtures::CURRENT_STATS)
            .expect("Failed to create fixtures");

    get_bin()
        .current_dir(temp_dir.path())
        .arg("nonexistent_baseline.json")
        .arg(&current)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nonexistent_baseline.json does not exist"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_nonexistent_current_exits_1_naming_path() {
    let (temp_dir, baseline, _) =
        fixtures::write_pair(fixtures::BASELINE_STATS, fixtures::CURRENT_STATS)
            .expect("Failed to create fixtures");

    get_bin()
        .current_dir(temp_dir.path())
        .arg(&baseline)
        .arg("nonexistent_current.json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nonexistent_current.json does not exist"));
}

#[test]
fn test_malformed_stats_exit_with_data_error() {
    let (temp_dir, baseline, current) =
        fixtures::write_pair(fixtures::BASELINE_STATS, r#"{"assets": []}"#)
            .expect("Failed to create fixtures");

    get_bin()
        .current_dir(temp_dir.path())
        .arg(&baseline)
        .arg(&current)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Malformed stats document"))
        .stderr(predicate::str::contains("chunks"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_non_numeric_cutoff_is_rejected() {
    let (temp_dir, baseline, current) =
        fixtures::write_pair(fixtures::BASELINE_STATS, fixtures::CURRENT_STATS)
            .expect("Failed to create fixtures");

    get_bin()
        .current_dir(temp_dir.path())
        .arg(&baseline)
        .arg(&current)
        .arg("--cutoff")
        .arg("lots")
        .assert()
        .failure();
}

#[test]
fn test_completions_flag_prints_script() {
    get_bin()
        .arg("--completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("webpack-diff"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let (temp_dir, baseline, current) =
        fixtures::write_pair(fixtures::BASELINE_STATS, fixtures::CURRENT_STATS)
            .expect("Failed to create fixtures");
    std::fs::write(temp_dir.path().join(".webpack-diff.toml"), "cutoff = \"big\"\n")
        .expect("Failed to write config");

    get_bin()
        .current_dir(temp_dir.path())
        .arg(&baseline)
        .arg(&current)
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Invalid configuration"));
}
