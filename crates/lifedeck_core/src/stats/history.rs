//! Rolling history of daily wellness snapshots.
//!
//! # Responsibility
//! - Append day snapshots and enforce the bounded FIFO window.
//!
//! # Invariants
//! - The retained window never exceeds 7 entries; overflow drops from the
//!   front.
//! - Entries sharing a weekday label are kept separate, never merged.

use crate::model::health::HistoryEntry;
use chrono::{Local, NaiveDate};

/// Retained window size for daily wellness snapshots.
pub const MAX_HISTORY_ENTRIES: usize = 7;

/// Appends today's snapshot of `normalized_score` (0-1 scale) and returns
/// the truncated history.
pub fn log_day(history: &[HistoryEntry], normalized_score: f64) -> Vec<HistoryEntry> {
    log_day_on(
        history,
        normalized_score,
        &weekday_label(Local::now().date_naive()),
    )
}

/// `log_day` with an explicit day label. Deterministic variant for callers
/// and tests that control the calendar.
pub fn log_day_on(history: &[HistoryEntry], normalized_score: f64, day: &str) -> Vec<HistoryEntry> {
    let mut updated = history.to_vec();
    updated.push(HistoryEntry {
        day: day.to_string(),
        score: (normalized_score * 100.0).round() as i64,
    });

    if updated.len() > MAX_HISTORY_ENTRIES {
        let overflow = updated.len() - MAX_HISTORY_ENTRIES;
        updated.drain(..overflow);
    }

    updated
}

/// Weekday short label (`Mon`..`Sun`) for a calendar date.
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
