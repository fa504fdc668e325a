// ABOUTME: Tracker configuration loaded from environment variables
// ABOUTME: Output format and failure policy, validated when loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tracker Configuration Module
//!
//! Defaults are overridden by environment variables:
//!
//! | Variable                | Values          | Default |
//! |-------------------------|-----------------|---------|
//! | `TRACKER_OUTPUT_FORMAT` | `text`, `json`  | `text`  |
//! | `TRACKER_FAIL_FAST`     | `true`, `false` | `true`  |

pub mod error;

pub use error::ConfigError;

use std::env;

use serde::{Deserialize, Serialize};

use crate::formatters::OutputFormat;

/// Environment variable selecting the summary format
pub const OUTPUT_FORMAT_VAR: &str = "TRACKER_OUTPUT_FORMAT";

/// Environment variable selecting whether the first bad package aborts the run
pub const FAIL_FAST_VAR: &str = "TRACKER_FAIL_FAST";

/// Tracker settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Format summaries are rendered in
    pub output_format: OutputFormat,
    /// Abort on the first package that cannot be built; otherwise log and skip it
    pub fail_fast: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            fail_fast: true,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    pub fn load() -> Result<Self, ConfigError> {
        Self::default().apply_env_overrides()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(value) = Self::read_env_var(OUTPUT_FORMAT_VAR)? {
            self.output_format =
                OutputFormat::parse(&value).ok_or(ConfigError::Parse {
                    var: OUTPUT_FORMAT_VAR,
                    value,
                })?;
        }

        if let Some(value) = Self::read_env_var(FAIL_FAST_VAR)? {
            self.fail_fast = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Parse {
                        var: FAIL_FAST_VAR,
                        value,
                    })
                }
            };
        }

        Ok(self)
    }

    fn read_env_var(name: &'static str) -> Result<Option<String>, ConfigError> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
        }
    }
}
