use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opl_types::{PlayerId, SessionId};

use crate::error::{LedgerError, LedgerResult};

/// Starting cash for a fresh player.
pub const STARTING_MONEY: u64 = 1000;
/// Garage size every player begins with. Not mutated by this core.
pub const STARTING_VEHICLES: u32 = 3;

/// Persistent per-player progression state.
///
/// `level` is always derived from `total_score`; it is never set directly.
/// `money`, `reputation`, and `total_score` only ever grow under session
/// play — nothing in this core debits a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub email: String,
    pub username: String,
    pub level: u32,
    pub money: u64,
    pub reputation: u64,
    pub vehicles: u32,
    pub total_score: u64,
    /// Present in the schema, not yet credited by any operation.
    pub missions_completed: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Immutable log entry for one completed play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub player_id: PlayerId,
    pub session_type: String,
    pub score: u64,
    pub duration_secs: u64,
    pub money_earned: u64,
    pub reputation_gained: u64,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied draft of a completed play session.
///
/// Numeric fields arrive as floats from the JSON boundary; they are
/// validated (finite, non-negative) and floored to whole numbers when the
/// draft becomes a [`SessionRecord`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionInput {
    pub player_id: PlayerId,
    pub session_type: String,
    pub score: f64,
    pub duration_secs: f64,
    pub money_earned: f64,
    pub reputation_gained: f64,
}

impl SessionInput {
    /// Validate and stamp into an immutable record.
    ///
    /// Fails without side effects; the caller only appends the returned
    /// record once every field has passed.
    pub(crate) fn into_record(self) -> LedgerResult<SessionRecord> {
        if self.session_type.trim().is_empty() {
            return Err(LedgerError::EmptySessionType);
        }
        let score = checked_floor("score", self.score)?;
        let duration_secs = checked_floor("duration_secs", self.duration_secs)?;
        let money_earned = checked_floor("money_earned", self.money_earned)?;
        let reputation_gained = checked_floor("reputation_gained", self.reputation_gained)?;

        Ok(SessionRecord {
            id: SessionId::new(),
            player_id: self.player_id,
            session_type: self.session_type,
            score,
            duration_secs,
            money_earned,
            reputation_gained,
            created_at: Utc::now(),
        })
    }
}

fn checked_floor(field: &'static str, value: f64) -> LedgerResult<u64> {
    // NaN and infinities fail the range check too; reject them explicitly
    // rather than letting `as` saturate.
    if !value.is_finite() || value < 0.0 {
        return Err(LedgerError::InvalidNumeric { field, value });
    }
    Ok(value.floor() as u64)
}
