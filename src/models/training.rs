// ABOUTME: Base training record and the Workout capability trait
// ABOUTME: Shared distance and mean speed formulas plus the training type enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use fitness_core::constants::{codes, step_length::DEFAULT_LEN_STEP, units::M_IN_KM};
use fitness_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::InfoMessage;

/// Kind of training record
///
/// The variant name is the training type shown in the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingType {
    /// Base record without a calorie formula
    Training,
    /// Running
    Running,
    /// Sports walking
    SportsWalking,
    /// Pool swimming
    Swimming,
}

impl TrainingType {
    /// Name used in the summary line
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Training => "Training",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Dispatch code for this record kind, if it can be built from a package
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Training => None,
            Self::Running => Some(codes::RUNNING),
            Self::SportsWalking => Some(codes::SPORTS_WALKING),
            Self::Swimming => Some(codes::SWIMMING),
        }
    }

    /// Number of positional values the record is built from
    #[must_use]
    pub const fn field_count(&self) -> usize {
        match self {
            Self::Training | Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Resolve a dispatch code (`RUN`, `WLK`, `SWM`)
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutType` for any other code
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code {
            codes::RUNNING => Ok(Self::Running),
            codes::SPORTS_WALKING => Ok(Self::SportsWalking),
            codes::SWIMMING => Ok(Self::Swimming),
            other => Err(AppError::unknown_workout_type(other)),
        }
    }
}

impl FromStr for TrainingType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability set shared by every workout record
///
/// Only the accessors are required. Distance and speed use the base formulas
/// unless a record overrides them; calories have no base formula.
pub trait Workout {
    /// Raw fields shared by every record
    fn training(&self) -> &Training;

    /// Record kind
    fn training_type(&self) -> TrainingType;

    /// Distance covered per counted action
    fn len_step(&self) -> f64 {
        DEFAULT_LEN_STEP
    }

    /// Number of counted actions (steps or strokes)
    fn action(&self) -> u32 {
        self.training().action
    }

    /// Workout duration in hours
    fn duration_hours(&self) -> f64 {
        self.training().duration_hours
    }

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64 {
        self.training().weight_kg
    }

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Spent kilocalories
    ///
    /// # Errors
    ///
    /// Returns `NotImplemented` unless the record supplies its own formula
    fn spent_calories(&self) -> AppResult<f64> {
        Err(AppError::not_implemented(
            "spent_calories",
            self.training_type().name(),
        ))
    }

    /// Build the summary message for this record
    ///
    /// # Errors
    ///
    /// Propagates the error from [`Workout::spent_calories`]
    fn show_training_info(&self) -> AppResult<InfoMessage> {
        Ok(InfoMessage::new(
            self.training_type(),
            self.duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories()?,
        ))
    }
}

/// Base training record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrainingFields")]
pub struct Training {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Training {
    /// Create a base record
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if duration or weight is not a positive finite number
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        Ok(Self {
            action,
            duration_hours: ensure_positive("duration", duration_hours)?,
            weight_kg: ensure_positive("weight", weight_kg)?,
        })
    }
}

/// Unvalidated wire form of [`Training`]
#[derive(Deserialize)]
struct TrainingFields {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl TryFrom<TrainingFields> for Training {
    type Error = AppError;

    fn try_from(fields: TrainingFields) -> AppResult<Self> {
        Self::new(fields.action, fields.duration_hours, fields.weight_kg)
    }
}

impl Workout for Training {
    fn training(&self) -> &Training {
        self
    }

    fn training_type(&self) -> TrainingType {
        TrainingType::Training
    }
}

/// Reject zero, negative and non-finite values used as divisors or body measures
pub(crate) fn ensure_positive(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::out_of_range(field, value))
    }
}
