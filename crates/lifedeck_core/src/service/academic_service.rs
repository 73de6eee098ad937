//! Academic use-case service.
//!
//! # Responsibility
//! - Mutate the subject collection with validation, clamping and
//!   write-through.
//! - Expose the GPA estimate and the study-hours milestone.
//!
//! # Invariants
//! - `progress` is clamped to 0-100 on every write path.
//! - Mutations targeting an unknown id are no-op rewrites, not errors.

use crate::model::academic::{seed_subjects, Subject, SubjectId};
use crate::repo::kv_store::KvStore;
use crate::repo::record_store::{keys, RecordStore};
use crate::service::{next_record_id, ServiceResult};
use crate::stats::score::gpa_estimate;

/// Study-hours goal for the milestone tracker.
pub const STUDY_MILESTONE_HOURS: f64 = 50.0;

/// Progress toward the study-hours milestone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneStatus {
    pub total_hours: f64,
    pub reached: bool,
    /// Hours still missing; zero once reached.
    pub remaining_hours: f64,
}

/// Use-case service for the academic domain.
pub struct AcademicService<S: KvStore> {
    store: RecordStore<S>,
}

impl<S: KvStore> AcademicService<S> {
    pub fn new(kv: S) -> Self {
        Self {
            store: RecordStore::new(kv),
        }
    }

    /// Current subject collection, seeded on first use.
    pub fn subjects(&self) -> ServiceResult<Vec<Subject>> {
        Ok(self
            .store
            .load_collection(keys::ACADEMIC_SUBJECTS, seed_subjects)?)
    }

    /// Appends a validated subject and persists the full collection.
    pub fn add_subject(
        &self,
        title: impl Into<String>,
        progress: u8,
        next_task: impl Into<String>,
        hours_studied: f64,
    ) -> ServiceResult<SubjectId> {
        let mut subjects = self.subjects()?;
        let id = next_record_id(subjects.iter().map(|subject| subject.id).max());

        let subject = Subject {
            id,
            title: title.into(),
            progress: Subject::clamp_progress(progress),
            next_task: next_task.into(),
            hours_studied,
        };
        subject.validate()?;

        subjects.push(subject);
        self.store
            .save_collection(keys::ACADEMIC_SUBJECTS, &subjects)?;
        Ok(id)
    }

    /// Removes the subject with `id` and persists the remainder.
    pub fn delete_subject(&self, id: SubjectId) -> ServiceResult<()> {
        let mut subjects = self.subjects()?;
        subjects.retain(|subject| subject.id != id);
        self.store
            .save_collection(keys::ACADEMIC_SUBJECTS, &subjects)?;
        Ok(())
    }

    /// Updates one subject's progress, clamped to 0-100.
    pub fn set_progress(&self, id: SubjectId, progress: u8) -> ServiceResult<()> {
        let mut subjects = self.subjects()?;
        for subject in &mut subjects {
            if subject.id == id {
                subject.progress = Subject::clamp_progress(progress);
            }
        }
        self.store
            .save_collection(keys::ACADEMIC_SUBJECTS, &subjects)?;
        Ok(())
    }

    /// GPA estimate over the current collection; `None` when no subjects.
    pub fn gpa_estimate(&self) -> ServiceResult<Option<f64>> {
        Ok(gpa_estimate(&self.subjects()?))
    }

    /// Total hours studied across all subjects.
    pub fn total_hours(&self) -> ServiceResult<f64> {
        Ok(self
            .subjects()?
            .iter()
            .map(|subject| subject.hours_studied)
            .sum())
    }

    /// Study-hours milestone against the fixed 50h goal.
    pub fn milestone(&self) -> ServiceResult<MilestoneStatus> {
        let total_hours = self.total_hours()?;
        Ok(MilestoneStatus {
            total_hours,
            reached: total_hours >= STUDY_MILESTONE_HOURS,
            remaining_hours: (STUDY_MILESTONE_HOURS - total_hours).max(0.0),
        })
    }
}
