use chrono::NaiveDate;
use lifedeck_core::{
    keys, FinanceService, KvStore, MemoryKvStore, ServiceError, TransactionKind,
};

fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

#[test]
fn seeded_collection_yields_documented_totals() {
    let kv = MemoryKvStore::new();
    let service = FinanceService::new(&kv);

    let totals = service.totals().unwrap();
    assert_eq!(totals.income, 7000.0);
    assert_eq!(totals.expense, 1900.0);
    assert_eq!(totals.net, 5100.0);
}

#[test]
fn add_transaction_writes_through_to_storage() {
    let kv = MemoryKvStore::new();
    let service = FinanceService::new(&kv);

    let id = service
        .add_transaction(TransactionKind::Expense, 25.0, "Coffee", date("2025-03-03"))
        .unwrap();

    // The mutation must be observable in raw storage, not only in memory.
    let payload = kv.get(keys::FINANCE_TRANSACTIONS).unwrap().unwrap();
    assert!(payload.contains("Coffee"));

    let transactions = service.transactions().unwrap();
    assert_eq!(transactions.len(), 6);
    assert_eq!(transactions.last().unwrap().id, id);
}

#[test]
fn added_ids_are_unique_and_creation_ordered() {
    let kv = MemoryKvStore::new();
    let service = FinanceService::new(&kv);

    let first = service
        .add_transaction(TransactionKind::Income, 10.0, "Tips", date("2025-03-01"))
        .unwrap();
    let second = service
        .add_transaction(TransactionKind::Income, 20.0, "Tips", date("2025-03-02"))
        .unwrap();

    assert!(second > first);
    let ids: Vec<i64> = service
        .transactions()
        .unwrap()
        .iter()
        .map(|tx| tx.id)
        .collect();
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids, deduped);
}

#[test]
fn add_transaction_rejects_negative_amount_and_blank_category() {
    let kv = MemoryKvStore::new();
    let service = FinanceService::new(&kv);

    let err = service
        .add_transaction(TransactionKind::Expense, -5.0, "Food", date("2025-03-03"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::FinanceValidation(_)));

    let err = service
        .add_transaction(TransactionKind::Expense, 5.0, "  ", date("2025-03-03"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::FinanceValidation(_)));

    // Failed mutations never persist.
    assert!(kv.get(keys::FINANCE_TRANSACTIONS).unwrap().is_none());
}

#[test]
fn delete_removes_by_id_and_unknown_id_is_a_noop() {
    let kv = MemoryKvStore::new();
    let service = FinanceService::new(&kv);

    service.delete_transaction(2).unwrap();
    let transactions = service.transactions().unwrap();
    assert_eq!(transactions.len(), 4);
    assert!(transactions.iter().all(|tx| tx.id != 2));

    service.delete_transaction(999).unwrap();
    assert_eq!(service.transactions().unwrap().len(), 4);
}

#[test]
fn derived_metrics_follow_the_latest_write() {
    let kv = MemoryKvStore::new();
    let service = FinanceService::new(&kv);

    service
        .add_transaction(TransactionKind::Expense, 100.0, "Travel", date("2025-06-10"))
        .unwrap();

    let totals = service.totals().unwrap();
    assert_eq!(totals.net, 5000.0);

    let series = service.monthly_series().unwrap();
    assert_eq!(
        series.iter().map(|point| point.month).collect::<Vec<_>>(),
        vec!["Jan", "Feb", "Jun"]
    );

    let breakdown = service.category_breakdown().unwrap();
    assert_eq!(
        breakdown
            .iter()
            .map(|entry| entry.category.as_str())
            .collect::<Vec<_>>(),
        vec!["Rent", "Food", "Utilities", "Travel"]
    );
}
