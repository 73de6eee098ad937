//! Scalar metric derivation: wellness score, net worth, GPA estimate.
//!
//! # Responsibility
//! - Compute each metric exactly as the dashboard defines it.
//!
//! # Invariants
//! - Wellness clamps the weighted sum, not the individual terms: inputs past
//!   their nominal maxima still contribute until the aggregate cap.
//! - Net worth is an exact sum, no currency rounding.
//! - GPA on an empty subject list is `None`, never a division by zero.

use crate::model::academic::Subject;
use crate::model::finance::{Transaction, TransactionKind};

const SLEEP_TARGET_HOURS: f64 = 8.0;
const WATER_TARGET_ML: f64 = 2500.0;
const MOOD_SCALE: f64 = 5.0;
const PROGRESS_PER_GRADE_POINT: f64 = 25.0;

/// Weighted wellness on a 0-1 scale.
///
/// `clamp(sleep/8 * 0.3 + water/2500 * 0.3 + mood/5 * 0.4, 0, 1)`
pub fn wellness_normalized(sleep_hours: f64, water_ml: f64, mood_level: f64) -> f64 {
    let weighted = sleep_hours / SLEEP_TARGET_HOURS * 0.3
        + water_ml / WATER_TARGET_ML * 0.3
        + mood_level / MOOD_SCALE * 0.4;
    weighted.clamp(0.0, 1.0)
}

/// Wellness score on a 0-100 scale.
pub fn wellness(sleep_hours: f64, water_ml: f64, mood_level: f64) -> f64 {
    wellness_normalized(sleep_hours, water_ml, mood_level) * 100.0
}

/// Income and expense sums over a transaction collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransactionTotals {
    pub income: f64,
    pub expense: f64,
}

pub fn totals(transactions: &[Transaction]) -> TransactionTotals {
    let mut sums = TransactionTotals::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => sums.income += tx.amount,
            TransactionKind::Expense => sums.expense += tx.amount,
        }
    }
    sums
}

/// Income total minus expense total. Empty collection yields 0.
pub fn net_worth(transactions: &[Transaction]) -> f64 {
    let sums = totals(transactions);
    sums.income - sums.expense
}

/// Average of `progress / 25` across subjects, rounded to one decimal.
///
/// Returns `None` for an empty collection (rendered as "N/A"). The result is
/// deliberately not clamped; the 0-100 progress domain already bounds it.
pub fn gpa_estimate(subjects: &[Subject]) -> Option<f64> {
    if subjects.is_empty() {
        return None;
    }
    let sum: f64 = subjects
        .iter()
        .map(|subject| f64::from(subject.progress) / PROGRESS_PER_GRADE_POINT)
        .sum();
    let average = sum / subjects.len() as f64;
    Some((average * 10.0).round() / 10.0)
}
