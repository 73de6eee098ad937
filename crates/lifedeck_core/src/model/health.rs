//! Health domain records.
//!
//! # Responsibility
//! - Define the daily health inputs and the rolling wellness history entry.
//! - Own the per-field input ranges used by the mutation layer.
//!
//! # Invariants
//! - Each input field is clamped to its range independently; there is no
//!   cross-field invariant.
//! - History entries carry a weekday short label and a 0-100 score.

use serde::{Deserialize, Serialize};

pub const SLEEP_HOURS_RANGE: (f64, f64) = (0.0, 12.0);
pub const WATER_ML_RANGE: (u32, u32) = (0, 4000);
pub const MOOD_LEVEL_RANGE: (u8, u8) = (1, 5);
pub const STEPS_RANGE: (u32, u32) = (0, 15_000);

/// Current daily health inputs, assembled from the per-field scalar keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthInput {
    /// Hours slept, nominal range 0-12 in half-hour steps.
    pub sleep_hours: f64,
    /// Water intake in milliliters, nominal range 0-4000.
    pub water_ml: u32,
    /// Mood on a 1-5 scale.
    pub mood_level: u8,
    /// Steps taken, nominal range 0-15000.
    pub steps: u32,
}

impl HealthInput {
    /// Seed values used when nothing has been persisted yet.
    pub fn seed() -> Self {
        Self {
            sleep_hours: 7.5,
            water_ml: 1500,
            mood_level: 3,
            steps: 5000,
        }
    }

    pub fn clamp_sleep_hours(value: f64) -> f64 {
        value.clamp(SLEEP_HOURS_RANGE.0, SLEEP_HOURS_RANGE.1)
    }

    pub fn clamp_water_ml(value: u32) -> u32 {
        value.clamp(WATER_ML_RANGE.0, WATER_ML_RANGE.1)
    }

    pub fn clamp_mood_level(value: u8) -> u8 {
        value.clamp(MOOD_LEVEL_RANGE.0, MOOD_LEVEL_RANGE.1)
    }

    pub fn clamp_steps(value: u32) -> u32 {
        value.clamp(STEPS_RANGE.0, STEPS_RANGE.1)
    }
}

/// One logged day in the rolling wellness history.
///
/// Duplicate `day` labels are allowed inside the retained window; every log
/// call is an independent append, never a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Weekday short label, e.g. `Mon`.
    pub day: String,
    /// Wellness score for that day, 0-100.
    pub score: i64,
}
