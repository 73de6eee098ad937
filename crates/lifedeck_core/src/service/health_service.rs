//! Health use-case service.
//!
//! # Responsibility
//! - Read and mutate the per-field health scalars with range clamping.
//! - Log daily wellness snapshots into the bounded rolling history.
//!
//! # Invariants
//! - Every setter clamps to its field range and persists immediately.
//! - `log_day` recomputes the normalized wellness from the currently
//!   persisted inputs at call time.

use crate::model::health::{HealthInput, HistoryEntry};
use crate::repo::kv_store::KvStore;
use crate::repo::record_store::{keys, RecordStore};
use crate::service::ServiceResult;
use crate::stats::{history, score};

/// Use-case service for the health domain.
pub struct HealthService<S: KvStore> {
    store: RecordStore<S>,
}

impl<S: KvStore> HealthService<S> {
    pub fn new(kv: S) -> Self {
        Self {
            store: RecordStore::new(kv),
        }
    }

    /// Current daily inputs, seeded field by field when unset.
    pub fn inputs(&self) -> ServiceResult<HealthInput> {
        let seed = HealthInput::seed();
        Ok(HealthInput {
            sleep_hours: self.store.load_scalar(keys::HEALTH_SLEEP, seed.sleep_hours)?,
            water_ml: self.store.load_scalar(keys::HEALTH_WATER, f64::from(seed.water_ml))? as u32,
            mood_level: self.store.load_scalar(keys::HEALTH_MOOD, f64::from(seed.mood_level))?
                as u8,
            steps: self.store.load_scalar(keys::HEALTH_STEPS, f64::from(seed.steps))? as u32,
        })
    }

    pub fn set_sleep_hours(&self, value: f64) -> ServiceResult<()> {
        let clamped = HealthInput::clamp_sleep_hours(value);
        self.store.save_scalar(keys::HEALTH_SLEEP, clamped)?;
        Ok(())
    }

    pub fn set_water_ml(&self, value: u32) -> ServiceResult<()> {
        let clamped = HealthInput::clamp_water_ml(value);
        self.store
            .save_scalar(keys::HEALTH_WATER, f64::from(clamped))?;
        Ok(())
    }

    pub fn set_mood_level(&self, value: u8) -> ServiceResult<()> {
        let clamped = HealthInput::clamp_mood_level(value);
        self.store
            .save_scalar(keys::HEALTH_MOOD, f64::from(clamped))?;
        Ok(())
    }

    pub fn set_steps(&self, value: u32) -> ServiceResult<()> {
        let clamped = HealthInput::clamp_steps(value);
        self.store
            .save_scalar(keys::HEALTH_STEPS, f64::from(clamped))?;
        Ok(())
    }

    /// Wellness score (0-100) derived from the current persisted inputs.
    pub fn wellness(&self) -> ServiceResult<f64> {
        let inputs = self.inputs()?;
        Ok(score::wellness(
            inputs.sleep_hours,
            f64::from(inputs.water_ml),
            f64::from(inputs.mood_level),
        ))
    }

    /// Rolling wellness history, newest last. Empty when never logged.
    pub fn history(&self) -> ServiceResult<Vec<HistoryEntry>> {
        Ok(self
            .store
            .load_collection(keys::HEALTH_HISTORY, Vec::new)?)
    }

    /// Logs today's wellness snapshot and returns the updated history.
    pub fn log_day(&self) -> ServiceResult<Vec<HistoryEntry>> {
        let inputs = self.inputs()?;
        let normalized = score::wellness_normalized(
            inputs.sleep_hours,
            f64::from(inputs.water_ml),
            f64::from(inputs.mood_level),
        );

        let updated = history::log_day(&self.history()?, normalized);
        self.store.save_collection(keys::HEALTH_HISTORY, &updated)?;
        Ok(updated)
    }
}
