//! Finance domain records.
//!
//! # Responsibility
//! - Define the persisted transaction shape and its write-path validation.
//! - Provide the seed collection used on first run.
//!
//! # Invariants
//! - `amount` must never be negative on the write path.
//! - `id` is unique and creation-ordered within the collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a transaction. Epoch milliseconds at creation time,
/// bumped past the current collection maximum on clock collision.
pub type TransactionId = i64;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// One recorded money movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Serialized as `type` to match the persisted payload contract.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount in account currency; non-negative on the write path.
    pub amount: f64,
    /// Free-form category label, non-empty on the write path.
    pub category: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl Transaction {
    /// Checks write-path invariants.
    ///
    /// Read paths intentionally skip this: a persisted payload that parses
    /// but violates these rules is accepted as-is.
    pub fn validate(&self) -> Result<(), FinanceValidationError> {
        if self.amount < 0.0 || self.amount.is_nan() {
            return Err(FinanceValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(FinanceValidationError::EmptyCategory);
        }
        Ok(())
    }
}

/// Write-path validation failure for finance records.
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceValidationError {
    NegativeAmount(f64),
    EmptyCategory,
}

impl Display for FinanceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "transaction amount must be >= 0, got {amount}")
            }
            Self::EmptyCategory => write!(f, "transaction category must not be empty"),
        }
    }
}

impl Error for FinanceValidationError {}

/// Seed collection persisted on first use.
pub fn seed_transactions() -> Vec<Transaction> {
    let tx = |id, kind, amount, category: &str, year, month, day| Transaction {
        id,
        kind,
        amount,
        category: category.to_string(),
        // Seed dates are compile-time constants and always valid.
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
    };

    vec![
        tx(1, TransactionKind::Income, 4000.0, "Salary", 2025, 1, 15),
        tx(2, TransactionKind::Expense, 1200.0, "Rent", 2025, 1, 1),
        tx(3, TransactionKind::Expense, 400.0, "Food", 2025, 1, 10),
        tx(4, TransactionKind::Expense, 300.0, "Utilities", 2025, 1, 20),
        tx(5, TransactionKind::Income, 3000.0, "Freelance", 2025, 2, 5),
    ]
}
