use std::sync::Arc;

use chrono::Utc;

use opl_store::KeyValueStore;
use opl_types::PlayerId;

use crate::error::{LedgerError, LedgerResult};
use crate::level::level_for_score;
use crate::records::{PlayerRecord, STARTING_MONEY, STARTING_VEHICLES};

/// Store key for one player record.
fn player_key(id: &PlayerId) -> String {
    format!("player_{id}")
}

/// Authoritative lookup, default-creation, and stat accumulation for
/// player records, keyed by player id.
///
/// All operations are self-contained read-modify-writes against the
/// injected store. Concurrent writers for the same id race with
/// last-write-wins semantics — acceptable for the single-user-per-record
/// deployment this serves. A multi-writer deployment needs per-key locking
/// or a compare-and-swap on `updated_at` before reusing this as-is.
pub struct PlayerStore {
    store: Arc<dyn KeyValueStore>,
}

impl PlayerStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Pure lookup; no side effects. `Ok(None)` when no record exists.
    pub fn get(&self, id: &PlayerId) -> LedgerResult<Option<PlayerRecord>> {
        match self.store.get(&player_key(id))? {
            Some(json) => {
                let record = serde_json::from_str(&json)
                    .map_err(|e| LedgerError::Serialization(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Construct a fresh record with the starting loadout.
    ///
    /// Does NOT persist — callers construct-then-mutate freely and decide
    /// when the first [`save`](Self::save) happens.
    pub fn create_default(
        &self,
        id: PlayerId,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> PlayerRecord {
        let now = Utc::now();
        PlayerRecord {
            id,
            email: email.into(),
            username: username.into(),
            level: level_for_score(0),
            money: STARTING_MONEY,
            reputation: 0,
            vehicles: STARTING_VEHICLES,
            total_score: 0,
            missions_completed: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Persist `record` under its id, replacing any previous version.
    /// Idempotent; last write wins.
    pub fn save(&self, record: &PlayerRecord) -> LedgerResult<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        self.store.put(&player_key(&record.id), &json)?;
        Ok(())
    }

    /// Self-healing lookup: the stored record, or a freshly persisted
    /// default. The one place the default-on-absence policy lives.
    pub fn get_or_create_default(
        &self,
        id: &PlayerId,
        username: &str,
        email: &str,
    ) -> LedgerResult<PlayerRecord> {
        if let Some(record) = self.get(id)? {
            return Ok(record);
        }
        let record = self.create_default(id.clone(), username, email);
        self.save(&record)?;
        tracing::info!(player = %id, "created default player record");
        Ok(record)
    }

    /// Credit one session's deltas to the stored record.
    ///
    /// Loads the current record, adds the three deltas, recomputes `level`
    /// from the new total, stamps `updated_at`, persists, and returns the
    /// updated record. Returns `Ok(None)` when no record exists for `id`;
    /// this operation never creates records.
    pub fn apply_session_delta(
        &self,
        id: &PlayerId,
        score_gained: u64,
        money_earned: u64,
        reputation_gained: u64,
    ) -> LedgerResult<Option<PlayerRecord>> {
        let Some(mut record) = self.get(id)? else {
            return Ok(None);
        };

        record.total_score = record.total_score.saturating_add(score_gained);
        record.money = record.money.saturating_add(money_earned);
        record.reputation = record.reputation.saturating_add(reputation_gained);
        record.level = level_for_score(record.total_score);
        record.updated_at = Utc::now();

        self.save(&record)?;
        tracing::debug!(
            player = %id,
            total_score = record.total_score,
            level = record.level,
            "applied session delta"
        );
        Ok(Some(record))
    }
}
