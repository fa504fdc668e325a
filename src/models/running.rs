// ABOUTME: Running workout record
// ABOUTME: Calories scale with mean speed, body weight and duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_core::constants::running::{CALORIES_SPEED_MULTIPLIER, CALORIES_SPEED_SUBTRACTION};
use fitness_core::constants::units::{MINUTES_IN_HOUR, M_IN_KM};
use fitness_core::errors::AppResult;
use serde::{Deserialize, Serialize};

use super::{Training, TrainingType, Workout};

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    #[serde(flatten)]
    training: Training,
}

impl Running {
    /// Create a running record from step count, hours and kilograms
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if duration or weight is not a positive finite number
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        Ok(Self {
            training: Training::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Workout for Running {
    fn training(&self) -> &Training {
        &self.training
    }

    fn training_type(&self) -> TrainingType {
        TrainingType::Running
    }

    fn spent_calories(&self) -> AppResult<f64> {
        Ok((CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_SPEED_SUBTRACTION)
            * self.weight_kg()
            / M_IN_KM
            * self.duration_hours()
            * MINUTES_IN_HOUR)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_half_hour_run() {
        // 6000 steps in 0.5 h: 3.9 km at 7.8 km/h
        let run = Running::new(6000, 0.5, 60.0).unwrap();
        assert!((run.distance_km() - 3.9).abs() < 1e-12);
        assert!((run.mean_speed_kmh() - 7.8).abs() < 1e-12);

        // (18 * 7.8 - 20) * 60 / 1000 * 0.5 * 60
        let expected = (18.0 * 7.8 - 20.0) * 60.0 / 1000.0 * 0.5 * 60.0;
        assert!((run.spent_calories().unwrap() - expected).abs() < 1e-9);
    }
}
