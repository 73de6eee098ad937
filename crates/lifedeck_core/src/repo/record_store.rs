//! Record store: seed-defaulting loads and full-replace saves.
//!
//! # Responsibility
//! - Translate between domain collections/scalars and textual payloads.
//! - Degrade missing or malformed persisted data to the domain seed default.
//!
//! # Invariants
//! - `load_*` never fails on absent or unparsable data; only storage
//!   transport errors propagate.
//! - `save_*` replaces the entire stored value under a key.
//! - No semantic validation here; a parsable but semantically wrong payload
//!   is returned as-is. Validation belongs to the mutation layer.

use crate::repo::kv_store::KvStore;
use crate::repo::{RepoError, RepoResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Persisted storage keys. These names are the on-device contract and must
/// stay stable across releases.
pub mod keys {
    pub const HEALTH_SLEEP: &str = "health_sleep";
    pub const HEALTH_WATER: &str = "health_water";
    pub const HEALTH_MOOD: &str = "health_mood";
    pub const HEALTH_STEPS: &str = "health_steps";
    pub const HEALTH_HISTORY: &str = "health_history";
    pub const FINANCE_TRANSACTIONS: &str = "finance_transactions";
    pub const ACADEMIC_SUBJECTS: &str = "academic_subjects";
}

/// Typed load/save over an injected `KvStore`.
pub struct RecordStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> RecordStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Loads a JSON-encoded collection, falling back to `seed` when the key
    /// is absent or the payload does not parse.
    pub fn load_collection<T: DeserializeOwned>(
        &self,
        key: &str,
        seed: impl FnOnce() -> Vec<T>,
    ) -> RepoResult<Vec<T>> {
        match self.kv.get(key)? {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(items) => Ok(items),
                Err(err) => {
                    warn!(
                        "event=record_load module=repo status=recovered key={key} error_code=malformed_payload error={err}"
                    );
                    Ok(seed())
                }
            },
            None => {
                debug!("event=record_load module=repo status=seeded key={key}");
                Ok(seed())
            }
        }
    }

    /// Replaces the entire stored collection under `key`.
    pub fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> RepoResult<()> {
        let payload = serde_json::to_string(items).map_err(RepoError::Encode)?;
        self.kv.set(key, &payload)?;
        debug!(
            "event=record_save module=repo status=ok key={key} count={}",
            items.len()
        );
        Ok(())
    }

    /// Loads a textual numeric scalar, falling back to `default` when the
    /// key is absent or the value does not parse as a number.
    pub fn load_scalar(&self, key: &str, default: f64) -> RepoResult<f64> {
        match self.kv.get(key)? {
            Some(text) => match text.trim().parse::<f64>() {
                Ok(value) => Ok(value),
                Err(_) => {
                    warn!(
                        "event=record_load module=repo status=recovered key={key} error_code=malformed_scalar"
                    );
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    /// Stores a numeric scalar as text.
    pub fn save_scalar(&self, key: &str, value: f64) -> RepoResult<()> {
        self.kv.set(key, &value.to_string())
    }
}
