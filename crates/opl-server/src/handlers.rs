use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use opl_ledger::SessionInput;
use opl_types::PlayerId;

use crate::api::{
    ErrorResponse, HealthResponse, LeaderboardResponse, PlayerStatsResponse, SaveSessionRequest,
    SaveSessionResponse, SignupRequest, SignupResponse, API_VERSION, GUEST_EMAIL, GUEST_USERNAME,
    MODE_DEGRADED, MODE_OFFLINE,
};
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "opl-server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": API_VERSION,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PlayerStatsParams {
    #[serde(default)]
    pub player_id: Option<String>,
}

/// `GET /v1/player-stats?player_id=<id>`
///
/// Absence self-heals: an unknown id gets a persisted guest record. A
/// failing store degrades to an unpersisted default — missing players and
/// broken storage are never a hard error here, only a missing id is.
pub async fn player_stats_handler(
    State(state): State<AppState>,
    Query(params): Query<PlayerStatsParams>,
) -> Response {
    let id = match params.player_id.map(PlayerId::new) {
        Some(Ok(id)) => id,
        _ => return bad_request("player_id required"),
    };

    match state.service.player_stats(&id, GUEST_USERNAME, GUEST_EMAIL) {
        Ok(player) => Json(PlayerStatsResponse {
            player,
            mode: MODE_OFFLINE.into(),
            message: Some("Playing in offline mode - progress saved locally".into()),
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(player = %id, error = %e, "player stats lookup failed; serving default");
            let fallback = state
                .service
                .players()
                .create_default(id, GUEST_USERNAME, GUEST_EMAIL);
            Json(PlayerStatsResponse {
                player: fallback,
                mode: MODE_DEGRADED.into(),
                message: None,
                error: Some("Using default player data".into()),
            })
            .into_response()
        }
    }
}

/// `POST /v1/save-session`
///
/// Validation failures are the only 4xx: they reject without mutating
/// state. Persistence failures degrade to a 200 with `player: null` and an
/// error annotation.
pub async fn save_session_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveSessionRequest>,
) -> Response {
    let player_id = match PlayerId::new(req.player_id) {
        Ok(id) => id,
        Err(e) => return bad_request(&e.to_string()),
    };

    let input = SessionInput {
        player_id,
        session_type: req.session_type,
        score: req.score,
        duration_secs: req.duration_secs,
        money_earned: req.money_earned,
        reputation_gained: req.reputation_gained,
    };

    match state.service.complete_session(input) {
        Ok(outcome) => {
            let message = if outcome.player.is_some() {
                "Session saved successfully in offline mode"
            } else {
                "Session logged; no player record to update"
            };
            Json(SaveSessionResponse {
                message: message.into(),
                mode: MODE_OFFLINE.into(),
                player: outcome.player,
                error: None,
            })
            .into_response()
        }
        Err(e) if e.is_validation() => bad_request(&e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "session save failed; degrading");
            Json(SaveSessionResponse {
                message: "Session not persisted - storage unavailable".into(),
                mode: MODE_DEGRADED.into(),
                player: None,
                error: Some(e.to_string()),
            })
            .into_response()
        }
    }
}

/// `GET /v1/leaderboard`
///
/// Serves the built-in sample standings; real ranking over the player
/// store does not exist yet.
pub async fn leaderboard_handler(State(state): State<AppState>) -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        leaderboard: state.service.leaderboard(),
        mode: MODE_OFFLINE.into(),
        message: "Playing in offline mode - leaderboard shows sample data".into(),
    })
}

/// `POST /v1/signup`
///
/// Account creation sits outside the degrade-to-defaults contract: lying
/// about a persisted profile would be worse than an error, so persistence
/// failures surface as 500 here.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Response {
    if req.username.trim().is_empty() {
        return bad_request("username required");
    }
    if req.email.trim().is_empty() {
        return bad_request("email required");
    }

    let id = match req.player_id {
        Some(raw) => match PlayerId::new(raw) {
            Ok(id) => id,
            Err(e) => return bad_request(&e.to_string()),
        },
        None => PlayerId::generate(),
    };

    match state.service.signup(id, req.username.trim(), req.email.trim()) {
        Ok(player) => (
            StatusCode::CREATED,
            Json(SignupResponse {
                message: "User created successfully".into(),
                player,
            }),
        )
            .into_response(),
        Err(e) if e.is_validation() => bad_request(&e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "signup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
