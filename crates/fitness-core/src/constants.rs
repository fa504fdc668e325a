// ABOUTME: Unit conversions and calorie coefficients for the supported workouts
// ABOUTME: Grouped per workout type so each formula reads its own constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants used by the distance, speed and calorie formulas.

/// Unit conversions shared by every workout
pub mod units {
    /// Meters in one kilometer
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MINUTES_IN_HOUR: f64 = 60.0;
}

/// Distance covered per counted action
pub mod step_length {
    /// Length of one running or walking step in meters
    pub const DEFAULT_LEN_STEP: f64 = 0.65;

    /// Length of one swimming stroke in meters
    pub const SWIMMING_LEN_STEP: f64 = 1.38;
}

/// Running calorie coefficients
pub mod running {
    /// Multiplier applied to mean speed
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;

    /// Subtracted from the scaled mean speed
    pub const CALORIES_SPEED_SUBTRACTION: f64 = 20.0;
}

/// Sports walking calorie coefficients
pub mod walking {
    /// Multiplier applied to body weight
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the floored speed-squared-over-height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie coefficients
pub mod swimming {
    /// Added to mean speed
    pub const CALORIES_SPEED_ADDITION: f64 = 1.1;

    /// Multiplier applied to the shifted mean speed
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 2.0;
}

/// Workout codes accepted by the dispatcher
pub mod codes {
    /// Running
    pub const RUNNING: &str = "RUN";

    /// Sports walking
    pub const SPORTS_WALKING: &str = "WLK";

    /// Swimming
    pub const SWIMMING: &str = "SWM";
}
