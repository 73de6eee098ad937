//! Pure derived-metric computation.
//!
//! # Responsibility
//! - Derive scalar metrics and chart-ready aggregates from raw records.
//! - Maintain the bounded rolling history of daily wellness scores.
//!
//! # Invariants
//! - Every function here is a pure read of its arguments; no derived state
//!   is cached between calls.

pub mod aggregate;
pub mod history;
pub mod score;
