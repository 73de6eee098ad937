//! Core domain logic for the lifedeck personal-tracking dashboard.
//! This crate is the single source of truth for persistence, derived
//! metrics and chart aggregation across the health, finance and academic
//! domains. Presentation layers consume the returned values read-only.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::academic::{
    seed_subjects, AcademicValidationError, Subject, SubjectId, MAX_PROGRESS,
};
pub use model::finance::{
    seed_transactions, FinanceValidationError, Transaction, TransactionId, TransactionKind,
};
pub use model::health::{HealthInput, HistoryEntry};
pub use repo::kv_store::{KvStore, MemoryKvStore, SqliteKvStore};
pub use repo::record_store::{keys, RecordStore};
pub use repo::{RepoError, RepoResult};
pub use service::academic_service::{AcademicService, MilestoneStatus, STUDY_MILESTONE_HOURS};
pub use service::dashboard_service::{DashboardService, DashboardSnapshot, BALANCE_GOAL};
pub use service::finance_service::{FinanceService, FinanceTotals};
pub use service::health_service::HealthService;
pub use service::{ServiceError, ServiceResult};
pub use stats::aggregate::{category_breakdown, monthly_series, CategoryTotal, MonthlyPoint};
pub use stats::history::{log_day, log_day_on, MAX_HISTORY_ENTRIES};
pub use stats::score::{gpa_estimate, net_worth, wellness, wellness_normalized};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
