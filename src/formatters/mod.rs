// ABOUTME: Output format abstraction for rendering workout summaries
// ABOUTME: Supports the human-readable summary line (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Summaries are printed as the human-readable line by default. JSON output
//! carries the same metrics unrounded for downstream tooling.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fitness_tracker::dispatcher::read_package;
//! use fitness_tracker::formatters::{format_summary, OutputFormat};
//! use fitness_tracker::models::Workout;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = read_package("RUN", &[15000.0, 1.0, 75.0])?.show_training_info()?;
//! let output = format_summary(&summary, OutputFormat::Json)?;
//! println!("{}", output.data);
//! # Ok(())
//! # }
//! ```

use std::error::Error;
use std::fmt;

use clap::ValueEnum;
use fitness_core::errors::AppError;
use serde::{Deserialize, Serialize};

use crate::models::InfoMessage;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary line (default)
    #[default]
    Text,
    /// One JSON object per summary
    Json,
}

impl OutputFormat {
    /// Parse a format name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered summary
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.message.clone()).with_source(error)
    }
}

/// Render a workout summary in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_summary(
    summary: &InfoMessage,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => summary.get_message(),
        OutputFormat::Json => serde_json::to_string(summary).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
