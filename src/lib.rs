// ABOUTME: Fitness tracker library computing workout summaries from raw sensor packages
// ABOUTME: Distance, mean speed and calories for running, sports walking and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Turns sensor packages such as `("RUN", [15000, 1, 75])` into workout
//! summaries:
//!
//! ```text
//! Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.
//! ```
//!
//! ## Modules
//!
//! - **models**: workout records, their calorie formulas and the summary message
//! - **dispatcher**: builds a record from a workout code and positional values
//! - **driver**: runs a list of packages and writes the summaries
//! - **formatters**: text and JSON rendering
//! - **config**: environment-driven settings
//! - **logging**: tracing subscriber setup

/// Workout records and summary message
pub mod models;

/// Sensor package dispatch
pub mod dispatcher;

/// Package runner and built-in samples
pub mod driver;

/// Output format abstraction
pub mod formatters;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Error types and constants shared with the core crate
pub use fitness_core::{constants, errors};
