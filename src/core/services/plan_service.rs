//! Loads, persists, and reconciles month-keyed plan snapshots.

use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::plan::{MonthKey, PlanSnapshot};
use crate::domain::row::{Row, WeeklyRow};
use crate::storage::KeyValueStore;

/// Snapshot manager bound to a key-value store.
pub struct PlanService<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> PlanService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the snapshot for the month.
    ///
    /// When the month has no snapshot of its own, the previous month's
    /// structure is carried forward with amounts cleared; at the very first
    /// use the snapshot starts empty. Never fails: storage and decode
    /// problems degrade to the same fallbacks.
    pub fn load(&self, month: MonthKey) -> PlanSnapshot {
        if let Some(snapshot) = self.read(month) {
            return snapshot;
        }
        match self.read(month.previous()) {
            Some(previous) => previous.carried_forward(),
            None => PlanSnapshot::default(),
        }
    }

    /// Serializes and overwrites the month's snapshot. Failures are logged
    /// and swallowed; the next save supersedes them.
    pub fn save(&self, month: MonthKey, snapshot: &PlanSnapshot) {
        let key = month.storage_key();
        let json = match serde_json::to_string(snapshot) {
            Ok(json) => json,
            Err(err) => {
                warn!(key = %key, error = %err, "failed to encode plan snapshot");
                return;
            }
        };
        if let Err(err) = self.storage.set(&key, &json) {
            warn!(key = %key, error = %err, "failed to persist plan snapshot");
        }
    }

    /// Load-mutate-save convenience used after every plan edit.
    pub fn update<F>(&self, month: MonthKey, mutator: F) -> PlanSnapshot
    where
        F: FnOnce(&mut PlanSnapshot),
    {
        let mut snapshot = self.load(month);
        mutator(&mut snapshot);
        self.save(month, &snapshot);
        snapshot
    }

    fn read(&self, month: MonthKey) -> Option<PlanSnapshot> {
        let key = month.storage_key();
        let blob = match self.storage.get(&key) {
            Ok(blob) => blob?,
            Err(err) => {
                warn!(key = %key, error = %err, "failed to read plan snapshot");
                return None;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(key = %key, error = %err, "discarding undecodable plan snapshot");
                None
            }
        }
    }
}

/// Syncs predicted rows to the current expense categories.
///
/// Rows for removed ids are dropped, new ids gain a blank row, kept rows
/// preserve their amounts. Output order follows the reference list, so the
/// sync is idempotent and independent of the input order.
pub fn reconcile_predicted(current: &[Row], reference: &[(String, String)]) -> Vec<Row> {
    reference
        .iter()
        .map(|(id, name)| match current.iter().find(|row| row.id == *id) {
            Some(row) => Row::with_parts(row.id.clone(), name.clone(), row.amount.clone()),
            None => Row::with_parts(id.clone(), name.clone(), ""),
        })
        .collect()
}

/// Syncs weekly rows to the predicted set; retained rows keep their buckets.
pub fn reconcile_weekly(current: &[WeeklyRow], predicted: &[Row]) -> Vec<WeeklyRow> {
    predicted
        .iter()
        .map(|row| {
            current
                .iter()
                .find(|weekly| weekly.id == row.id)
                .map(|weekly| {
                    let mut weekly = weekly.clone();
                    weekly.name = row.name.clone();
                    weekly
                })
                .unwrap_or_else(|| WeeklyRow::for_row(row))
        })
        .collect()
}

/// Syncs autofill percentages to the live ids, defaulting new ids to zero.
pub fn reconcile_percents(
    current: &BTreeMap<String, f64>,
    reference_ids: &[String],
) -> BTreeMap<String, f64> {
    reference_ids
        .iter()
        .map(|id| (id.clone(), current.get(id).copied().unwrap_or(0.0)))
        .collect()
}
