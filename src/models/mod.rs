// ABOUTME: Workout record models and the summary message they produce
// ABOUTME: Re-exports the Workout trait, the three concrete records and InfoMessage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Models
//!
//! Every workout is built once from raw sensor values and then only read.
//!
//! ## Core Models
//!
//! - `Workout`: capability set shared by every record (distance, speed, calories, summary)
//! - `Training`: the base record holding action count, duration and weight
//! - `Running`, `SportsWalking`, `Swimming`: concrete records with their own calorie formula
//! - `TrainingType`: record kind, its display name and dispatch code
//! - `InfoMessage`: immutable summary rendered to one line

mod info_message;
mod running;
mod sports_walking;
mod swimming;
mod training;

pub use info_message::InfoMessage;
pub use running::Running;
pub use sports_walking::{floor_div, SportsWalking};
pub use swimming::Swimming;
pub use training::{Training, TrainingType, Workout};
