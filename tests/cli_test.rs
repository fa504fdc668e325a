// ABOUTME: Integration tests for the fitness-tracker binary
// ABOUTME: Runs the built executable and checks stdout and exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the fitness-tracker binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

use serde_json::Value;

mod common;

/// Run the binary with a clean tracker environment and capture its output
fn run_cli(args: &[&str], env: &[(&str, &str)]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fitness-tracker"))
        .args(args)
        .env_remove("TRACKER_OUTPUT_FORMAT")
        .env_remove("TRACKER_FAIL_FAST")
        .env("RUST_LOG", "warn")
        .envs(env.iter().copied())
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_default_run_prints_sample_summaries() {
    let (exit_code, stdout, _stderr) = run_cli(&[], &[]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            common::SWIMMING_LINE,
            common::RUNNING_LINE,
            common::WALKING_LINE
        ]
    );
}

#[test]
fn test_format_json_flag() {
    let (exit_code, stdout, _stderr) = run_cli(&["--format", "json"], &[]);

    assert_eq!(exit_code, 0);
    let types: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: Value = serde_json::from_str(line).unwrap();
            value["training_type"].as_str().unwrap().to_owned()
        })
        .collect();
    assert_eq!(types, ["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn test_format_flag_overrides_environment() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["--format", "text"], &[("TRACKER_OUTPUT_FORMAT", "json")]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().next(), Some(common::SWIMMING_LINE));
}

#[test]
fn test_unknown_format_flag_is_a_usage_error() {
    let (exit_code, stdout, stderr) = run_cli(&["--format", "xml"], &[]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("xml"), "{stderr}");
}

#[test]
fn test_skip_invalid_with_clean_samples_succeeds() {
    let (exit_code, stdout, _stderr) = run_cli(&["--skip-invalid"], &[]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_invalid_output_format_environment_exits_with_config_status() {
    let (exit_code, stdout, stderr) = run_cli(&[], &[("TRACKER_OUTPUT_FORMAT", "xml")]);

    assert_eq!(exit_code, 78);
    assert!(stdout.is_empty());
    assert!(stderr.contains("TRACKER_OUTPUT_FORMAT"), "{stderr}");
}

#[test]
fn test_invalid_fail_fast_environment_exits_with_config_status() {
    let (exit_code, _stdout, _stderr) = run_cli(&[], &[("TRACKER_FAIL_FAST", "sometimes")]);

    assert_eq!(exit_code, 78);
}
