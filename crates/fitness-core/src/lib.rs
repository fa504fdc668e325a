// ABOUTME: Core types and constants for the fitness tracker
// ABOUTME: Foundation crate with error handling and workout formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Core
//!
//! Foundation crate shared by the tracker library and its binary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and per-workout calorie coefficients

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and workout formula coefficients
pub mod constants;
