use std::sync::Arc;

use opl_store::KeyValueStore;

use crate::error::{LedgerError, LedgerResult};
use crate::records::{SessionInput, SessionRecord};

/// Store key for the session log. One flat log shared across all players.
const SESSIONS_KEY: &str = "game_sessions";

/// Retention window: the log keeps this many entries, oldest evicted first.
pub const RETAINED_SESSIONS: usize = 50;

/// Append-only record of completed play sessions with bounded retention.
///
/// Entries are immutable once appended. Eviction is FIFO by append order:
/// once the log exceeds its capacity, the oldest entries fall off. Because
/// the log is global, heavy play by one player can evict another's history
/// — the retention window bounds storage, not fairness.
pub struct SessionLog {
    store: Arc<dyn KeyValueStore>,
    capacity: usize,
}

impl SessionLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_capacity(store, RETAINED_SESSIONS)
    }

    /// A log with a non-default retention window. Used by tests; production
    /// callers stick with [`RETAINED_SESSIONS`].
    pub fn with_capacity(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self { store, capacity }
    }

    /// Validate, stamp, append, and trim to the retention window.
    ///
    /// Validation failures reject the input before anything is written —
    /// a failed append leaves the log byte-identical.
    pub fn append(&self, input: SessionInput) -> LedgerResult<SessionRecord> {
        let record = input.into_record()?;

        let mut sessions = self.list()?;
        sessions.push(record.clone());
        if sessions.len() > self.capacity {
            let excess = sessions.len() - self.capacity;
            sessions.drain(..excess);
        }

        let json = serde_json::to_string(&sessions)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        self.store.put(SESSIONS_KEY, &json)?;

        tracing::debug!(
            session = %record.id,
            player = %record.player_id,
            retained = sessions.len(),
            "appended session"
        );
        Ok(record)
    }

    /// The full retained log in append order.
    pub fn list(&self) -> LedgerResult<Vec<SessionRecord>> {
        match self.store.get(SESSIONS_KEY)? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| LedgerError::Serialization(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }
}
