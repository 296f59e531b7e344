use serde::{Deserialize, Serialize};

use opl_ledger::{LeaderboardEntry, PlayerRecord};

/// API version reported by the health endpoint.
pub const API_VERSION: u32 = 1;

/// Profile used when a player record is self-created on first lookup.
pub const GUEST_USERNAME: &str = "Guest Player";
pub const GUEST_EMAIL: &str = "guest@example.com";

/// Storage-mode annotation carried by every game-data response. The game's
/// front end shows it; it never changes behavior.
pub const MODE_OFFLINE: &str = "offline";
/// Mode reported when persistence failed and the response fell back to
/// defaults.
pub const MODE_DEGRADED: &str = "degraded";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub api_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            api_version: API_VERSION,
        }
    }
}

/// Envelope around a player record, annotated with the storage mode it was
/// produced under.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerStatsResponse {
    pub player: PlayerRecord,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveSessionRequest {
    pub player_id: String,
    pub session_type: String,
    pub score: f64,
    pub duration_secs: f64,
    pub money_earned: f64,
    pub reputation_gained: f64,
}

/// `player` is absent when the session was logged for an unknown id (the
/// orphan case) or when persistence degraded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveSessionResponse {
    pub message: String,
    pub mode: String,
    pub player: Option<PlayerRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub mode: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Caller-assigned id (e.g. from the auth provider); minted server-side
    /// when absent.
    #[serde(default)]
    pub player_id: Option<String>,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub player: PlayerRecord,
}

/// Body of every 4xx/5xx response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert_eq!(h.api_version, 1);
    }

    #[test]
    fn save_session_request_parses_wire_shape() {
        let body = r#"{
            "player_id": "p1",
            "session_type": "street_race",
            "score": 1500,
            "duration_secs": 90,
            "money_earned": 200,
            "reputation_gained": 30
        }"#;
        let req: SaveSessionRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.player_id, "p1");
        assert_eq!(req.score, 1500.0);
    }

    #[test]
    fn signup_request_without_id() {
        let req: SignupRequest =
            serde_json::from_str(r#"{"username": "Nova", "email": "n@example.com"}"#).unwrap();
        assert!(req.player_id.is_none());
    }
}
