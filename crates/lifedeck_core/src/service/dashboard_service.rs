//! Cross-domain dashboard aggregation.
//!
//! # Responsibility
//! - Compose the three domain reads into one landing-view snapshot.
//!
//! # Invariants
//! - The snapshot is recomputed from persisted state on every call; nothing
//!   is cached between calls.
//! - `gpa_progress` is intentionally unclamped: an estimate above 4.0 would
//!   render above 100%. Not reachable with the current 0-4 divisor, kept as
//!   a documented latent edge case.

use crate::repo::kv_store::KvStore;
use crate::service::academic_service::AcademicService;
use crate::service::finance_service::FinanceService;
use crate::service::health_service::HealthService;
use crate::service::ServiceResult;

/// Fixed balance goal the dashboard measures progress against.
pub const BALANCE_GOAL: f64 = 5000.0;

const GPA_SCALE_MAX: f64 = 4.0;

/// Landing-view snapshot across all three domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSnapshot {
    /// Wellness score rounded and clamped to 0-100.
    pub health: i64,
    /// Net worth: income total minus expense total.
    pub balance: f64,
    /// GPA estimate; `None` renders as "N/A".
    pub gpa: Option<f64>,
    /// Progress-bar ratio for health, 0-100.
    pub health_progress: f64,
    /// Progress-bar ratio for balance against `BALANCE_GOAL`, clamped 0-100.
    pub balance_progress: f64,
    /// Progress-bar ratio for GPA on the 0-4 scale; 0 when no subjects.
    pub gpa_progress: f64,
}

/// Composes domain services over one shared storage handle.
pub struct DashboardService<S: KvStore> {
    kv: S,
}

impl<S: KvStore> DashboardService<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Reads all three domains and derives the landing-view metrics.
    pub fn snapshot(&self) -> ServiceResult<DashboardSnapshot> {
        let wellness = HealthService::new(&self.kv).wellness()?;
        let balance = FinanceService::new(&self.kv).totals()?.net;
        let gpa = AcademicService::new(&self.kv).gpa_estimate()?;

        let health = (wellness.round() as i64).clamp(0, 100);
        Ok(DashboardSnapshot {
            health,
            balance,
            gpa,
            health_progress: health as f64,
            balance_progress: (balance / BALANCE_GOAL * 100.0).clamp(0.0, 100.0),
            gpa_progress: gpa.map_or(0.0, |value| value / GPA_SCALE_MAX * 100.0),
        })
    }
}
