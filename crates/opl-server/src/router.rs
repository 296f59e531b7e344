use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the axum router with all OPL endpoints.
///
/// CORS is wide open: the consumer is the game's front end served from a
/// different origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health_handler))
        .route("/v1/info", get(handlers::info_handler))
        .route("/v1/player-stats", get(handlers::player_stats_handler))
        .route("/v1/save-session", post(handlers::save_session_handler))
        .route("/v1/leaderboard", get(handlers::leaderboard_handler))
        .route("/v1/signup", post(handlers::signup_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
