//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record-store reads/writes into per-domain use-case APIs.
//! - Persist synchronously after every mutation (write-through).
//!
//! # Invariants
//! - Mutations validate and clamp before persistence; reads never validate.
//! - Services hold no derived state; every metric is recomputed from the
//!   currently persisted collection.

use crate::model::academic::AcademicValidationError;
use crate::model::finance::FinanceValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod academic_service;
pub mod dashboard_service;
pub mod finance_service;
pub mod health_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case level error for tracker mutations and reads.
#[derive(Debug)]
pub enum ServiceError {
    FinanceValidation(FinanceValidationError),
    AcademicValidation(AcademicValidationError),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FinanceValidation(err) => write!(f, "{err}"),
            Self::AcademicValidation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FinanceValidation(err) => Some(err),
            Self::AcademicValidation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<FinanceValidationError> for ServiceError {
    fn from(value: FinanceValidationError) -> Self {
        Self::FinanceValidation(value)
    }
}

impl From<AcademicValidationError> for ServiceError {
    fn from(value: AcademicValidationError) -> Self {
        Self::AcademicValidation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Fresh creation-ordered id: epoch milliseconds, bumped past the current
/// collection maximum when the clock has not advanced.
pub(crate) fn next_record_id(existing_max: Option<i64>) -> i64 {
    let now_ms = chrono::Utc::now().timestamp_millis();
    match existing_max {
        Some(max) if now_ms <= max => max + 1,
        _ => now_ms,
    }
}
