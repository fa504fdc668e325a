// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and the expected sample summary lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `fitness_tracker`

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Tolerance used when comparing computed metrics
pub const EPSILON: f64 = 1e-9;

/// Expected summary line for `SWM [720, 1, 80, 25, 40]`
pub const SWIMMING_LINE: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
    Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.";

/// Expected summary line for `RUN [15000, 1, 75]`
pub const RUNNING_LINE: &str = "Тип тренировки: Running; Длительность: 1.000 ч.; \
    Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.";

/// Expected summary line for `WLK [9000, 1, 75, 180]`
pub const WALKING_LINE: &str = "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
    Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two metrics agree within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
