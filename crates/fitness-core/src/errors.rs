// ABOUTME: Unified error handling for workout construction, dispatch and rendering
// ABOUTME: Defines ErrorCode, AppError and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the tracker returns [`AppResult`]. Errors carry
//! a stable [`ErrorCode`], a human-readable message and optional structured
//! details, so the binary can log them and pick an exit status.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input value cannot be used (wrong type, negative count, fraction)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input value outside the range the formulas accept
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Positional data does not match the record's field count
    #[serde(rename = "ARITY_MISMATCH")]
    ArityMismatch = 3004,

    // Dispatch (4000-4999)
    /// Workout code is not one of the known codes
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 4000,
    /// Operation has no implementation for this training type
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented = 4001,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization of a summary failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status the binary reports for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange | Self::ArityMismatch => 65,
            Self::UnknownWorkoutType => 66,
            Self::NotImplemented => 69,
            Self::ConfigInvalid => 78,
            Self::InternalError | Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ArityMismatch => "The number of values does not match the workout type",
            Self::UnknownWorkoutType => "The workout type is not recognized",
            Self::NotImplemented => "The operation is not implemented for this training type",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Unified error type for the tracker
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(field: &str, value: f64) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a positive finite number, got {value}"),
        )
        .with_details(serde_json::json!({
            "field": field,
            "value": value,
        }))
    }

    /// Positional data of the wrong length for a workout type
    pub fn arity_mismatch(workout: &str, expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::ArityMismatch,
            format!("{workout} takes {expected} values but {actual} were given"),
        )
        .with_details(serde_json::json!({
            "workout": workout,
            "expected": expected,
            "actual": actual,
        }))
    }

    /// Unrecognized workout code
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        let code = code.into();
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("no workout registered for code '{code}'"),
        )
        .with_details(serde_json::json!({ "code": code }))
    }

    /// Operation not implemented for a training type
    pub fn not_implemented(operation: &str, training_type: &str) -> Self {
        Self::new(
            ErrorCode::NotImplemented,
            format!("{operation} is not defined for {training_type}"),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}
