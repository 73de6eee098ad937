//! Academic domain records.
//!
//! # Responsibility
//! - Define the persisted subject shape and its write-path validation.
//! - Provide the seed collection used on first run.
//!
//! # Invariants
//! - `progress` is clamped to 0-100 by the mutation layer.
//! - `title` must not be empty on the write path.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a subject. Epoch milliseconds at creation time,
/// bumped past the current collection maximum on clock collision.
pub type SubjectId = i64;

pub const MAX_PROGRESS: u8 = 100;

/// One tracked course of study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    /// Course title, non-empty on the write path.
    pub title: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// Short description of the next planned task.
    #[serde(rename = "nextTask")]
    pub next_task: String,
    /// Serialized as `hours` to match the persisted payload contract.
    #[serde(rename = "hours")]
    pub hours_studied: f64,
}

impl Subject {
    /// Checks write-path invariants. Read paths intentionally skip this.
    pub fn validate(&self) -> Result<(), AcademicValidationError> {
        if self.title.trim().is_empty() {
            return Err(AcademicValidationError::EmptyTitle);
        }
        Ok(())
    }

    pub fn clamp_progress(value: u8) -> u8 {
        value.min(MAX_PROGRESS)
    }
}

/// Write-path validation failure for academic records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcademicValidationError {
    EmptyTitle,
}

impl Display for AcademicValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "subject title must not be empty"),
        }
    }
}

impl Error for AcademicValidationError {}

/// Seed collection persisted on first use.
pub fn seed_subjects() -> Vec<Subject> {
    let subject = |id, title: &str, progress, next_task: &str, hours_studied| Subject {
        id,
        title: title.to_string(),
        progress,
        next_task: next_task.to_string(),
        hours_studied,
    };

    vec![
        subject(1, "Quantum Physics", 75, "Read Ch. 4", 12.0),
        subject(2, "Linear Algebra", 45, "Problem Set 3", 8.0),
        subject(3, "Computer Science", 90, "Final Project", 45.0),
        subject(4, "History of Art", 60, "Write Essay", 6.0),
    ]
}
