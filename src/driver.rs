// ABOUTME: Runs sensor packages through the dispatcher and writes one summary per record
// ABOUTME: Holds the built-in sample packages and the fail-fast or skip policy for bad ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Write;

use fitness_core::constants::codes;
use fitness_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::TrackerConfig;
use crate::dispatcher::read_package;
use crate::formatters::format_summary;
use crate::models::Workout;

/// Raw sensor package: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Positional values in record field order
    pub data: Vec<f64>,
}

impl Package {
    /// Create a package
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}

/// Built-in sample packages: one swim, one run, one walk
#[must_use]
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new(codes::SWIMMING, [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new(codes::RUNNING, [15_000.0, 1.0, 75.0]),
        Package::new(codes::SPORTS_WALKING, [9_000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Outcome of a run over a list of packages
#[derive(Debug, Default)]
pub struct RunReport {
    /// Summaries written
    pub written: usize,
    /// Packages skipped, with the reason (only when not failing fast)
    pub skipped: Vec<(Package, AppError)>,
}

impl RunReport {
    /// Exit status for a completed run: 0 when every package was written, 1 when some were skipped
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.skipped.is_empty())
    }
}

/// Exit status for a run outcome, using the error's code when the run aborted
#[must_use]
pub fn exit_code(result: &AppResult<RunReport>) -> u8 {
    match result {
        Ok(report) => report.exit_code(),
        Err(e) => e.exit_code(),
    }
}

/// Build, summarize and write every package, one line each
///
/// # Errors
///
/// With `fail_fast` set, returns the first package error. Write and
/// formatting failures are always returned.
pub fn run_packages<W: Write>(
    packages: &[Package],
    config: &TrackerConfig,
    out: &mut W,
) -> AppResult<RunReport> {
    let mut report = RunReport::default();

    for package in packages {
        let summary = match read_package(&package.workout_type, &package.data)
            .and_then(|record| record.show_training_info())
        {
            Ok(summary) => summary,
            Err(e) if !config.fail_fast => {
                warn!(
                    workout.code = %package.workout_type,
                    error = %e,
                    "Skipping sensor package"
                );
                report.skipped.push((package.clone(), e));
                continue;
            }
            Err(e) => return Err(e),
        };

        let output = format_summary(&summary, config.output_format)?;
        writeln!(out, "{}", output.data).map_err(|e| {
            AppError::internal(format!("failed to write summary: {e}")).with_source(e)
        })?;
        report.written += 1;
    }

    info!(
        written = report.written,
        skipped = report.skipped.len(),
        "Processed sensor packages"
    );
    Ok(report)
}
