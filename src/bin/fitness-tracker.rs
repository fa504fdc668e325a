// ABOUTME: Fitness tracker CLI printing summaries for the built-in sensor packages
// ABOUTME: Wires logging, environment configuration and command-line overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the sample summaries
//! fitness-tracker
//!
//! # Same summaries as JSON, with debug logs on stderr
//! fitness-tracker --format json --verbose
//!
//! # Log and skip packages that cannot be built instead of stopping
//! fitness-tracker --skip-invalid
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use fitness_tracker::config::TrackerConfig;
use fitness_tracker::driver::{exit_code, run_packages, sample_packages};
use fitness_tracker::errors::AppError;
use fitness_tracker::formatters::OutputFormat;
use fitness_tracker::logging::LoggingConfig;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    about = "Fitness tracker workout summaries",
    long_about = "Computes distance, mean speed and spent calories for the built-in running, walking and swimming sensor packages."
)]
struct Cli {
    /// Output format, overrides TRACKER_OUTPUT_FORMAT
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log and skip packages that cannot be built, overrides TRACKER_FAIL_FAST
    #[arg(long)]
    skip_invalid: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    let mut config = match TrackerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid tracker configuration");
            return ExitCode::from(AppError::from(e).exit_code());
        }
    };
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.skip_invalid {
        config.fail_fast = false;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run_packages(&sample_packages(), &config, &mut out);
    if let Err(e) = &result {
        error!(code = ?e.code, error = %e, "Failed to summarize sensor packages");
    }
    ExitCode::from(exit_code(&result))
}
