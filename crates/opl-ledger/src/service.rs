use std::sync::Arc;

use opl_store::KeyValueStore;
use opl_types::PlayerId;

use crate::error::{LedgerError, LedgerResult};
use crate::leaderboard::{sample_leaderboard, LeaderboardEntry};
use crate::players::PlayerStore;
use crate::records::{PlayerRecord, SessionInput, SessionRecord};
use crate::sessions::SessionLog;

/// Outcome of completing a play session.
///
/// `player` is `None` when the session was logged for an id with no player
/// record — the orphan case the two-step flow permits.
#[derive(Clone, Debug)]
pub struct SessionOutcome {
    pub session: SessionRecord,
    pub player: Option<PlayerRecord>,
}

/// High-level progression API: one facade over the player store and the
/// session log, sharing a single persistence medium.
pub struct ProgressionService {
    players: PlayerStore,
    sessions: SessionLog,
}

impl ProgressionService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            players: PlayerStore::new(Arc::clone(&store)),
            sessions: SessionLog::new(store),
        }
    }

    /// Direct access to the player record store.
    pub fn players(&self) -> &PlayerStore {
        &self.players
    }

    /// Log a completed session, then credit its deltas to the player.
    ///
    /// The two steps are deliberately not transactional: if the delta apply
    /// finds no player record, the already-appended session stays in the
    /// log as an orphan entry. Callers tolerate the orphan; nothing rolls
    /// it back.
    pub fn complete_session(&self, input: SessionInput) -> LedgerResult<SessionOutcome> {
        let session = self.sessions.append(input)?;
        let player = self.players.apply_session_delta(
            &session.player_id,
            session.score,
            session.money_earned,
            session.reputation_gained,
        )?;
        if player.is_none() {
            tracing::warn!(
                player = %session.player_id,
                session = %session.id,
                "session logged for unknown player; stats not credited"
            );
        }
        Ok(SessionOutcome { session, player })
    }

    /// Current stats for `id`, creating and persisting a default record on
    /// first access.
    pub fn player_stats(
        &self,
        id: &PlayerId,
        username: &str,
        email: &str,
    ) -> LedgerResult<PlayerRecord> {
        self.players.get_or_create_default(id, username, email)
    }

    /// Register a new player with an explicit profile. Fails when a record
    /// already exists for `id` — signup never resets progress.
    pub fn signup(&self, id: PlayerId, username: &str, email: &str) -> LedgerResult<PlayerRecord> {
        if self.players.get(&id)?.is_some() {
            return Err(LedgerError::PlayerExists(id));
        }
        let record = self.players.create_default(id, username, email);
        self.players.save(&record)?;
        tracing::info!(player = %record.id, "registered new player");
        Ok(record)
    }

    /// The retained session history, oldest first.
    pub fn session_history(&self) -> LedgerResult<Vec<SessionRecord>> {
        self.sessions.list()
    }

    /// Current standings (built-in sample set).
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        sample_leaderboard()
    }
}
