//! Chart-ready transaction aggregation.
//!
//! # Responsibility
//! - Reshape the transaction collection into the monthly income/expense
//!   series and the per-category expense totals.
//!
//! # Invariants
//! - Monthly buckets key on the month NAME only; transactions from different
//!   years sharing a month merge into one bucket (known multi-year
//!   limitation, preserved).
//! - Category totals keep first-occurrence insertion order, not magnitude
//!   order; top-N slicing is the caller's job and requires an explicit sort.

use crate::model::finance::{Transaction, TransactionKind};
use chrono::Datelike;
use serde::Serialize;

/// Fixed Jan→Dec ordering for the monthly series.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One month bucket of the income/expense series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub income: f64,
    pub expense: f64,
}

/// Groups transactions into month-name buckets, ordered Jan→Dec and
/// restricted to months with at least one transaction.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyPoint> {
    let mut income = [0.0f64; 12];
    let mut expense = [0.0f64; 12];
    let mut occupied = [false; 12];

    for tx in transactions {
        let index = tx.date.month0() as usize;
        occupied[index] = true;
        match tx.kind {
            TransactionKind::Income => income[index] += tx.amount,
            TransactionKind::Expense => expense[index] += tx.amount,
        }
    }

    (0..12)
        .filter(|&index| occupied[index])
        .map(|index| MonthlyPoint {
            month: MONTH_LABELS[index],
            income: income[index],
            expense: expense[index],
        })
        .collect()
}

/// One category's summed expense total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Sums expense amounts per category, preserving first-occurrence order.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut breakdown: Vec<CategoryTotal> = Vec::new();

    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }
        match breakdown
            .iter_mut()
            .find(|entry| entry.category == tx.category)
        {
            Some(entry) => entry.total += tx.amount,
            None => breakdown.push(CategoryTotal {
                category: tx.category.clone(),
                total: tx.amount,
            }),
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::{category_breakdown, monthly_series};
    use crate::model::finance::{seed_transactions, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn tx(kind: TransactionKind, amount: f64, category: &str, date: &str) -> Transaction {
        Transaction {
            id: 0,
            kind,
            amount,
            category: category.to_string(),
            date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    #[test]
    fn monthly_series_merges_same_month_across_years() {
        let transactions = vec![
            tx(TransactionKind::Expense, 100.0, "Food", "2024-01-05"),
            tx(TransactionKind::Income, 50.0, "Salary", "2025-01-10"),
        ];

        let series = monthly_series(&transactions);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[0].income, 50.0);
        assert_eq!(series[0].expense, 100.0);
    }

    #[test]
    fn monthly_series_orders_jan_to_dec_and_skips_empty_months() {
        let transactions = vec![
            tx(TransactionKind::Expense, 10.0, "Food", "2025-11-02"),
            tx(TransactionKind::Income, 20.0, "Salary", "2025-03-15"),
            tx(TransactionKind::Expense, 30.0, "Rent", "2025-03-01"),
        ];

        let series = monthly_series(&transactions);
        let months: Vec<&str> = series.iter().map(|point| point.month).collect();
        assert_eq!(months, vec!["Mar", "Nov"]);
        assert_eq!(series[0].income, 20.0);
        assert_eq!(series[0].expense, 30.0);
    }

    #[test]
    fn monthly_series_over_seed_splits_jan_and_feb() {
        let series = monthly_series(&seed_transactions());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[0].income, 4000.0);
        assert_eq!(series[0].expense, 1900.0);
        assert_eq!(series[1].month, "Feb");
        assert_eq!(series[1].income, 3000.0);
        assert_eq!(series[1].expense, 0.0);
    }

    #[test]
    fn category_breakdown_keeps_first_occurrence_order() {
        let transactions = vec![
            tx(TransactionKind::Expense, 100.0, "Food", "2025-01-01"),
            tx(TransactionKind::Expense, 200.0, "Rent", "2025-01-02"),
            tx(TransactionKind::Expense, 50.0, "Food", "2025-01-03"),
        ];

        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].total, 150.0);
        assert_eq!(breakdown[1].category, "Rent");
        assert_eq!(breakdown[1].total, 200.0);
    }

    #[test]
    fn category_breakdown_ignores_income() {
        let transactions = vec![
            tx(TransactionKind::Income, 4000.0, "Salary", "2025-01-01"),
            tx(TransactionKind::Expense, 75.0, "Food", "2025-01-02"),
        ];

        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, "Food");
    }
}
