//! Finance use-case service.
//!
//! # Responsibility
//! - Mutate the transaction collection with validation and write-through.
//! - Expose the derived finance metrics and chart aggregates.
//!
//! # Invariants
//! - `add_transaction` validates before persisting and assigns a fresh
//!   creation-ordered id, unique within the collection.
//! - Deleting an unknown id is a no-op rewrite, not an error.

use crate::model::finance::{
    seed_transactions, Transaction, TransactionId, TransactionKind,
};
use crate::repo::kv_store::KvStore;
use crate::repo::record_store::{keys, RecordStore};
use crate::service::{next_record_id, ServiceResult};
use crate::stats::aggregate::{category_breakdown, monthly_series, CategoryTotal, MonthlyPoint};
use crate::stats::score::{net_worth, totals};
use chrono::NaiveDate;

/// Summary figures for the finance overview cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinanceTotals {
    pub income: f64,
    pub expense: f64,
    /// Income minus expense; the dashboard's "available balance".
    pub net: f64,
}

/// Use-case service for the finance domain.
pub struct FinanceService<S: KvStore> {
    store: RecordStore<S>,
}

impl<S: KvStore> FinanceService<S> {
    pub fn new(kv: S) -> Self {
        Self {
            store: RecordStore::new(kv),
        }
    }

    /// Current transaction collection, seeded on first use.
    pub fn transactions(&self) -> ServiceResult<Vec<Transaction>> {
        Ok(self
            .store
            .load_collection(keys::FINANCE_TRANSACTIONS, seed_transactions)?)
    }

    /// Appends a validated transaction and persists the full collection.
    pub fn add_transaction(
        &self,
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> ServiceResult<TransactionId> {
        let mut transactions = self.transactions()?;
        let id = next_record_id(transactions.iter().map(|tx| tx.id).max());

        let transaction = Transaction {
            id,
            kind,
            amount,
            category: category.into(),
            date,
        };
        transaction.validate()?;

        transactions.push(transaction);
        self.store
            .save_collection(keys::FINANCE_TRANSACTIONS, &transactions)?;
        Ok(id)
    }

    /// Removes the transaction with `id` and persists the remainder.
    pub fn delete_transaction(&self, id: TransactionId) -> ServiceResult<()> {
        let mut transactions = self.transactions()?;
        transactions.retain(|tx| tx.id != id);
        self.store
            .save_collection(keys::FINANCE_TRANSACTIONS, &transactions)?;
        Ok(())
    }

    /// Income/expense/net sums over the current collection.
    pub fn totals(&self) -> ServiceResult<FinanceTotals> {
        let transactions = self.transactions()?;
        let sums = totals(&transactions);
        Ok(FinanceTotals {
            income: sums.income,
            expense: sums.expense,
            net: net_worth(&transactions),
        })
    }

    /// Monthly income/expense series over the current collection.
    pub fn monthly_series(&self) -> ServiceResult<Vec<MonthlyPoint>> {
        Ok(monthly_series(&self.transactions()?))
    }

    /// Per-category expense totals over the current collection.
    pub fn category_breakdown(&self) -> ServiceResult<Vec<CategoryTotal>> {
        Ok(category_breakdown(&self.transactions()?))
    }
}
