// ABOUTME: Immutable workout summary rendered to a single human-readable line
// ABOUTME: Carries type, duration, distance, speed and calories for text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;

use super::TrainingType;

/// Summary of one completed workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfoMessage {
    training_type: TrainingType,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl InfoMessage {
    /// Create a summary from already computed metrics
    #[must_use]
    pub const fn new(
        training_type: TrainingType,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Workout kind
    #[must_use]
    pub const fn training_type(&self) -> TrainingType {
        self.training_type
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Spent kilocalories
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Render the summary line, every metric to three decimals
    #[must_use]
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
