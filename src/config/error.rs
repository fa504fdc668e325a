// ABOUTME: Configuration error types for tracker settings
// ABOUTME: Defines error variants for unparseable and invalid environment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use fitness_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable held a value that could not be parsed
    #[error("Parse error: invalid {var}: '{value}'")]
    Parse {
        /// Variable name
        var: &'static str,
        /// Raw value found in the environment
        value: String,
    },

    /// Environment variable was not valid unicode
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
