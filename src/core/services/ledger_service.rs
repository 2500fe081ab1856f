//! Loads and persists the transaction ledger blob.

use tracing::warn;

use crate::domain::ledger::{Ledger, LEDGER_STORAGE_KEY};
use crate::storage::KeyValueStore;

/// Ledger store bound to a key-value backend.
///
/// Mirrors the snapshot manager's failure posture: reads degrade to the
/// seeded default ledger, writes are best-effort.
pub struct LedgerService<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> LedgerService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the ledger, seeding defaults when no usable blob exists.
    pub fn load(&self) -> Ledger {
        let blob = match self.storage.get(LEDGER_STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Ledger::with_defaults(),
            Err(err) => {
                warn!(error = %err, "failed to read ledger data");
                return Ledger::with_defaults();
            }
        };
        match serde_json::from_str(&blob) {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!(error = %err, "discarding undecodable ledger data");
                Ledger::with_defaults()
            }
        }
    }

    /// Serializes and overwrites the stored ledger; failures are logged and
    /// swallowed.
    pub fn save(&self, ledger: &Ledger) {
        let json = match serde_json::to_string(ledger) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to encode ledger data");
                return;
            }
        };
        if let Err(err) = self.storage.set(LEDGER_STORAGE_KEY, &json) {
            warn!(error = %err, "failed to persist ledger data");
        }
    }

    /// Load-mutate-save convenience for ledger edits.
    pub fn update<F>(&self, mutator: F) -> Ledger
    where
        F: FnOnce(&mut Ledger),
    {
        let mut ledger = self.load();
        mutator(&mut ledger);
        self.save(&ledger);
        ledger
    }
}
