//! Process-wide dataset cache.
//!
//! RULE: The seven tables are loaded once per snapshot and reused across
//! render passes. Nothing refreshes the snapshot implicitly — the only
//! ways to get new data are invalidate() followed by get_or_load(), or
//! an explicit reload().

use crate::config::DashboardConfig;
use crate::error::PulseResult;
use crate::loader;
use crate::tables::Dataset;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

/// One loaded generation of the dataset, identified for memoization.
#[derive(Debug, Clone)]
pub struct DatasetSnapshot {
    pub snapshot_id: String,
    pub loaded_at: DateTime<Utc>,
    pub dataset: Dataset,
}

pub struct DatasetCache {
    slot: Mutex<Option<Arc<DatasetSnapshot>>>,
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetCache {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached snapshot, loading it on first use.
    pub fn get_or_load(&self, config: &DashboardConfig) -> PulseResult<Arc<DatasetSnapshot>> {
        let mut slot = self.slot.lock().expect("dataset cache poisoned");
        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot = Arc::new(Self::load_snapshot(config)?);
        log::info!(
            "dataset snapshot {} loaded at {}",
            snapshot.snapshot_id,
            snapshot.loaded_at,
        );
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the cached snapshot. The next get_or_load() re-reads the files.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().expect("dataset cache poisoned");
        if let Some(old) = slot.take() {
            log::info!("dataset snapshot {} invalidated", old.snapshot_id);
        }
    }

    /// Invalidate and load in one step.
    pub fn reload(&self, config: &DashboardConfig) -> PulseResult<Arc<DatasetSnapshot>> {
        self.invalidate();
        self.get_or_load(config)
    }

    fn load_snapshot(config: &DashboardConfig) -> PulseResult<DatasetSnapshot> {
        let dataset = loader::load_dataset(config)?;
        Ok(DatasetSnapshot {
            snapshot_id: uuid::Uuid::new_v4().to_string(),
            loaded_at: Utc::now(),
            dataset,
        })
    }
}
