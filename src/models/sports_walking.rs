// ABOUTME: Sports walking workout record
// ABOUTME: Calories add a floored speed-squared-over-height term to a weight baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_core::constants::units::MINUTES_IN_HOUR;
use fitness_core::constants::walking::{
    CALORIES_SPEED_HEIGHT_MULTIPLIER, CALORIES_WEIGHT_MULTIPLIER,
};
use fitness_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::training::ensure_positive;
use super::{Training, TrainingType, Workout};

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SportsWalkingFields")]
pub struct SportsWalking {
    #[serde(flatten)]
    training: Training,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking record
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if duration, weight or height is not a positive finite number
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> AppResult<Self> {
        Ok(Self {
            training: Training::new(action, duration_hours, weight_kg)?,
            height_cm: ensure_positive("height", height_cm)?,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

#[derive(Deserialize)]
struct SportsWalkingFields {
    #[serde(flatten)]
    training: Training,
    height_cm: f64,
}

impl TryFrom<SportsWalkingFields> for SportsWalking {
    type Error = AppError;

    fn try_from(fields: SportsWalkingFields) -> AppResult<Self> {
        Ok(Self {
            training: fields.training,
            height_cm: ensure_positive("height", fields.height_cm)?,
        })
    }
}

impl Workout for SportsWalking {
    fn training(&self) -> &Training {
        &self.training
    }

    fn training_type(&self) -> TrainingType {
        TrainingType::SportsWalking
    }

    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh();
        let weight = self.weight_kg();
        Ok((CALORIES_WEIGHT_MULTIPLIER * weight
            + floor_div(speed * speed, self.height_cm) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.duration_hours()
            * MINUTES_IN_HOUR)
    }
}

/// Floored float division
///
/// Derives the quotient from the remainder rather than flooring `a / b`, so a
/// quotient that rounds up to an integer in floating point is not overcounted.
#[must_use]
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && ((divisor < 0.0) != (remainder < 0.0)) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
