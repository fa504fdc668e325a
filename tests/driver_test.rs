// ABOUTME: End-to-end tests running sensor packages through the driver
// ABOUTME: Verifies exact summary lines, JSON output and the skip-invalid policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::config::TrackerConfig;
use fitness_tracker::driver::{exit_code, run_packages, sample_packages, Package};
use fitness_tracker::errors::ErrorCode;
use fitness_tracker::formatters::OutputFormat;
use serde_json::Value;

mod common;

fn run_to_string(packages: &[Package], config: &TrackerConfig) -> (String, usize, usize) {
    let mut out = Vec::new();
    let report = run_packages(packages, config, &mut out).unwrap();
    (
        String::from_utf8(out).unwrap(),
        report.written,
        report.skipped.len(),
    )
}

#[test]
fn test_sample_packages_are_fixed() {
    let packages = sample_packages();
    let codes: Vec<&str> = packages.iter().map(|p| p.workout_type.as_str()).collect();
    assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    assert_eq!(packages[0].data, [720.0, 1.0, 80.0, 25.0, 40.0]);
    assert_eq!(packages[1].data, [15_000.0, 1.0, 75.0]);
    assert_eq!(packages[2].data, [9_000.0, 1.0, 75.0, 180.0]);
}

#[test]
fn test_sample_run_prints_expected_lines() {
    common::init_test_logging();

    let (output, written, skipped) = run_to_string(&sample_packages(), &TrackerConfig::default());

    assert_eq!(written, 3);
    assert_eq!(skipped, 0);
    let lines: Vec<&str> = output.lines().collect();
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
fn test_json_run_emits_one_object_per_line() {
    let config = TrackerConfig {
        output_format: OutputFormat::Json,
        ..TrackerConfig::default()
    };
    let (output, written, _) = run_to_string(&sample_packages(), &config);

    assert_eq!(written, 3);
    let summaries: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(summaries[0]["training_type"], "Swimming");
    assert_eq!(summaries[1]["training_type"], "Running");
    assert_eq!(summaries[2]["training_type"], "SportsWalking");
    common::assert_close(summaries[1]["calories"].as_f64().unwrap(), 699.75);
    common::assert_close(summaries[2]["distance"].as_f64().unwrap(), 5.85);
}

#[test]
fn test_fail_fast_stops_at_unknown_code() {
    common::init_test_logging();

    let packages = vec![
        Package::new("RUN", [15_000.0, 1.0, 75.0]),
        Package::new("XYZ", [1.0, 1.0, 1.0]),
        Package::new("WLK", [9_000.0, 1.0, 75.0, 180.0]),
    ];
    let mut out = Vec::new();
    let error = run_packages(&packages, &TrackerConfig::default(), &mut out).unwrap_err();

    assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
    // The summary before the bad package was already written
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn test_skip_invalid_continues_past_bad_packages() {
    common::init_test_logging();

    let packages = vec![
        Package::new("XYZ", [1.0, 1.0, 1.0]),
        Package::new("RUN", [15_000.0, 1.0]),
        Package::new("RUN", [15_000.0, 1.0, 75.0]),
    ];
    let config = TrackerConfig {
        fail_fast: false,
        ..TrackerConfig::default()
    };
    let mut out = Vec::new();
    let report = run_packages(&packages, &config, &mut out).unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].0.workout_type, "XYZ");
    assert_eq!(report.skipped[0].1.code, ErrorCode::UnknownWorkoutType);
    assert_eq!(report.skipped[1].1.code, ErrorCode::ArityMismatch);
    assert_eq!(String::from_utf8(out).unwrap().trim_end(), common::RUNNING_LINE);
}

#[test]
fn test_empty_package_list_writes_nothing() {
    let (output, written, skipped) = run_to_string(&[], &TrackerConfig::default());
    assert!(output.is_empty());
    assert_eq!((written, skipped), (0, 0));
}

#[test]
fn test_exit_code_reflects_run_outcome() {
    let mut out = Vec::new();

    let clean = run_packages(&sample_packages(), &TrackerConfig::default(), &mut out);
    assert_eq!(exit_code(&clean), 0);

    let lenient = TrackerConfig {
        fail_fast: false,
        ..TrackerConfig::default()
    };
    let packages = vec![
        Package::new("XYZ", [1.0, 1.0, 1.0]),
        Package::new("RUN", [15_000.0, 1.0, 75.0]),
    ];
    let skipped = run_packages(&packages, &lenient, &mut out);
    assert_eq!(exit_code(&skipped), 1);

    let aborted = run_packages(&packages, &TrackerConfig::default(), &mut out);
    assert_eq!(exit_code(&aborted), 66);

    let bad_arity = vec![Package::new("SWM", [720.0, 1.0])];
    let aborted = run_packages(&bad_arity, &TrackerConfig::default(), &mut out);
    assert_eq!(exit_code(&aborted), 65);
}
