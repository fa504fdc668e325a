// ABOUTME: Pool swimming workout record
// ABOUTME: Mean speed comes from pool length and lap count instead of stroke distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_core::constants::step_length::SWIMMING_LEN_STEP;
use fitness_core::constants::swimming::{CALORIES_SPEED_ADDITION, CALORIES_SPEED_MULTIPLIER};
use fitness_core::constants::units::M_IN_KM;
use fitness_core::errors::AppResult;
use serde::{Deserialize, Serialize};

use super::{Training, TrainingType, Workout};

/// Pool swimming workout
///
/// Distance is counted from strokes; mean speed is counted from laps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    #[serde(flatten)]
    training: Training,
    length_pool_m: u32,
    count_pool: u32,
}

impl Swimming {
    /// Create a swimming record
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if duration or weight is not a positive finite number
    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        length_pool_m: u32,
        count_pool: u32,
    ) -> AppResult<Self> {
        Ok(Self {
            training: Training::new(action, duration_hours, weight_kg)?,
            length_pool_m,
            count_pool,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool_m(&self) -> u32 {
        self.length_pool_m
    }

    /// Number of pool laps swum
    #[must_use]
    pub const fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Workout for Swimming {
    fn training(&self) -> &Training {
        &self.training
    }

    fn training_type(&self) -> TrainingType {
        TrainingType::Swimming
    }

    fn len_step(&self) -> f64 {
        SWIMMING_LEN_STEP
    }

    fn mean_speed_kmh(&self) -> f64 {
        f64::from(self.length_pool_m) * f64::from(self.count_pool) / M_IN_KM / self.duration_hours()
    }

    fn spent_calories(&self) -> AppResult<f64> {
        Ok((self.mean_speed_kmh() + CALORIES_SPEED_ADDITION)
            * CALORIES_SPEED_MULTIPLIER
            * self.weight_kg())
    }
}
