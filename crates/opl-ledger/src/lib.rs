//! Player progression and session ledger for Overdrive City.
//!
//! This crate is the heart of OPL. It provides:
//! - `PlayerRecord` / `SessionRecord` types with validated construction
//! - `PlayerStore`: keyed lookup, default-creation, and stat accumulation
//! - `SessionLog`: append-only session history with bounded retention
//! - The leveling step function derived from cumulative score
//! - `ProgressionService`: the session-completion orchestration facade
//!
//! Persistence is delegated to an injected [`opl_store::KeyValueStore`];
//! records are stored as JSON documents under string keys.

pub mod error;
pub mod leaderboard;
pub mod level;
pub mod players;
pub mod records;
pub mod service;
pub mod sessions;

pub use error::{LedgerError, LedgerResult};
pub use leaderboard::{sample_leaderboard, LeaderboardEntry};
pub use level::level_for_score;
pub use players::PlayerStore;
pub use records::{PlayerRecord, SessionInput, SessionRecord};
pub use service::{ProgressionService, SessionOutcome};
pub use sessions::{SessionLog, RETAINED_SESSIONS};
