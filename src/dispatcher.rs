// ABOUTME: Builds workout records from a sensor package of code plus positional values
// ABOUTME: Rejects unknown codes, wrong value counts and non-integral counters with typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Package Dispatcher
//!
//! Sensors report a workout as a code (`RUN`, `WLK`, `SWM`) and a flat list of
//! numbers. The dispatcher picks the record type for the code and spreads the
//! numbers into its constructor in declaration order:
//!
//! | Code  | Record          | Values                                            |
//! |-------|-----------------|---------------------------------------------------|
//! | `RUN` | `Running`       | action, duration, weight                          |
//! | `WLK` | `SportsWalking` | action, duration, weight, height                  |
//! | `SWM` | `Swimming`      | action, duration, weight, pool length, pool count |

use fitness_core::errors::{AppError, AppResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{
    InfoMessage, Running, SportsWalking, Swimming, Training, TrainingType, Workout,
};

/// A record built from a sensor package
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum WorkoutRecord {
    /// Running record
    Running(Running),
    /// Sports walking record
    SportsWalking(SportsWalking),
    /// Swimming record
    Swimming(Swimming),
}

impl WorkoutRecord {
    fn as_workout(&self) -> &dyn Workout {
        match self {
            Self::Running(record) => record,
            Self::SportsWalking(record) => record,
            Self::Swimming(record) => record,
        }
    }
}

impl Workout for WorkoutRecord {
    fn training(&self) -> &Training {
        self.as_workout().training()
    }

    fn training_type(&self) -> TrainingType {
        self.as_workout().training_type()
    }

    fn len_step(&self) -> f64 {
        self.as_workout().len_step()
    }

    fn distance_km(&self) -> f64 {
        self.as_workout().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_workout().mean_speed_kmh()
    }

    fn spent_calories(&self) -> AppResult<f64> {
        self.as_workout().spent_calories()
    }

    fn show_training_info(&self) -> AppResult<InfoMessage> {
        self.as_workout().show_training_info()
    }
}

impl From<Running> for WorkoutRecord {
    fn from(record: Running) -> Self {
        Self::Running(record)
    }
}

impl From<SportsWalking> for WorkoutRecord {
    fn from(record: SportsWalking) -> Self {
        Self::SportsWalking(record)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(record: Swimming) -> Self {
        Self::Swimming(record)
    }
}

/// Build the record a sensor package describes
///
/// # Errors
///
/// - `UnknownWorkoutType` if `workout_type` is not `RUN`, `WLK` or `SWM`
/// - `ArityMismatch` if `data` does not hold exactly the record's field count
/// - `InvalidInput` if a counter (steps, pool length, laps) is not a whole non-negative number
/// - `ValueOutOfRange` if duration, weight or height is not positive
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<WorkoutRecord> {
    let kind = TrainingType::from_code(workout_type).inspect_err(|_| {
        warn!(workout.code = %workout_type, "Unknown workout type in sensor package");
    })?;

    debug!(
        workout.code = %workout_type,
        workout.type = %kind,
        values = data.len(),
        "Building workout record"
    );

    let record = match (kind, data) {
        (TrainingType::Running, &[action, duration, weight]) => {
            Running::new(counter("action", action)?, duration, weight)?.into()
        }
        (TrainingType::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(counter("action", action)?, duration, weight, height)?.into()
        }
        (TrainingType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(
                counter("action", action)?,
                duration,
                weight,
                counter("length_pool", length_pool)?,
                counter("count_pool", count_pool)?,
            )?
            .into()
        }
        (kind, values) => {
            return Err(AppError::arity_mismatch(
                kind.name(),
                kind.field_count(),
                values.len(),
            ));
        }
    };

    Ok(record)
}

/// Convert a positional value into a whole-number counter
fn counter(field: &str, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(format!(
            "{field} must be a whole non-negative number, got {value}"
        )));
    }
    Ok(value as u32)
}
